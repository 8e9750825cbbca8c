// Derive usage example for iniman
//
// Binds two record types with #[derive(IniSection)], writes them, and reads
// them back after a reload.
//
// Run with: cargo run --example derive_usage

use iniman::{IniEnum, IniSection, IniSettings, LineEnding};

#[derive(Debug, Clone, Copy, Default, PartialEq, IniEnum)]
enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Default, IniSection)]
#[ini(section = "Appearance")]
struct Appearance {
    #[ini(key = "Theme")]
    theme: Theme,

    #[ini(key = "FontSize")]
    font_size: u32,

    #[ini(key = "Zoom")]
    zoom: f64,
}

#[derive(Debug, Default, IniSection)]
#[ini(section = "Mirror")]
struct Mirror {
    #[ini(key = "Url")]
    url: String,

    #[ini(key = "Enabled")]
    enabled: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let settings = IniSettings::builder("derive-example")
        .config_dir("./example_config")
        .line_ending(LineEnding::Lf)
        .build()?;

    // =========================================================================
    // Single section
    // =========================================================================
    settings.write(&Appearance {
        theme: Theme::Dark,
        font_size: 14,
        zoom: 1.25,
    })?;
    settings.reload()?;

    let appearance: Appearance = settings.read()?;
    println!("Appearance: {appearance:?}");

    // =========================================================================
    // Numbered sections
    // =========================================================================
    settings.write_list(&[
        Mirror {
            url: "https://mirror-a.example.org".into(),
            enabled: true,
        },
        Mirror {
            url: "https://mirror-b.example.org".into(),
            enabled: false,
        },
    ])?;
    settings.reload()?;

    for (i, mirror) in settings.read_list::<Mirror>()?.iter().enumerate() {
        println!("Mirror{}: {} (enabled: {})", i + 1, mirror.url, mirror.enabled);
    }

    // Appearance was replaced by the list write, so this falls back to defaults
    let appearance: Appearance = settings.read_safe();
    println!("After list write: {appearance:?}");

    Ok(())
}
