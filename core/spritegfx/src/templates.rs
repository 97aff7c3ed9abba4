/// Plain `SpriteType` block, tab-indented for a top-level `spriteTypes`
/// container.
pub fn simple_sprite(name: &str, texturefile: &str) -> Vec<String> {
    vec![
        "\tSpriteType = {".to_owned(),
        format!("\t\tname = \"{name}\""),
        format!("\t\ttexturefile = \"{texturefile}\""),
        "\t}".to_owned(),
    ]
}

/// Focus shine sprite: the base texture plus two scrolling shine-overlay
/// animations rotating in opposite directions, as the base game does it.
pub fn shine_sprite(name: &str, icon_name: &str) -> Vec<String> {
    let texture = format!("gfx/interface/goals/{icon_name}.dds");
    let mut block = vec![
        "\tSpriteType = {".to_owned(),
        format!("\t\tname = \"{name}\""),
        format!("\t\ttexturefile = \"{texture}\""),
    ];
    block.extend(shine_animation(&texture, "90.0", false));
    block.extend(shine_animation(&texture, "-90.0", true));
    block.push("\t\tlegacy_lazy_load = no".to_owned());
    block.push("\t}".to_owned());
    block
}

fn shine_animation(mask: &str, rotation: &str, with_effect: bool) -> Vec<String> {
    let mut lines = vec![
        "\t\tanimation = {".to_owned(),
        "\t\t\tanimationtexturescale = { x = 1.0 y = 1.0 }".to_owned(),
        "\t\t\tanimationrotationoffset = { x = 0.0 y = 0.0 }".to_owned(),
        "\t\t\tanimationtype = \"scrolling\"".to_owned(),
        "\t\t\tanimationblendmode = \"add\"".to_owned(),
        "\t\t\tanimationdelay = 0".to_owned(),
        "\t\t\tanimationtime = 0.75".to_owned(),
        "\t\t\tanimationlooping = no".to_owned(),
        format!("\t\t\tanimationrotation = {rotation}"),
        "\t\t\tanimationtexturefile = \"gfx/interface/goals/shine_overlay.dds\"".to_owned(),
        format!("\t\t\tanimationmaskfile = \"{mask}\""),
    ];
    if with_effect {
        lines.push("\t\t\teffectFile = \"gfx/FX/buttonstate.lua\"".to_owned());
    }
    lines.push("\t\t}".to_owned());
    lines
}
