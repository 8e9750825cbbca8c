// Backup and restore example for iniman
//
// Every write copies the previous file to `settings.ini.bak`; restoring copies
// it back.
//
// Run with: cargo run --example backup_restore

use iniman::{Binding, IniSection, IniSettings};

#[derive(Debug, Default)]
struct Window {
    width: u32,
    height: u32,
}

impl IniSection for Window {
    fn binding() -> Binding<Self> {
        Binding::new("Window")
            .field("Width", "width", |w: &Self| &w.width, |w: &mut Self| &mut w.width)
            .field("Height", "height", |w: &Self| &w.height, |w: &mut Self| &mut w.height)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let settings = IniSettings::open("./example_config/backup-example.ini")?;

    settings.write(&Window {
        width: 1280,
        height: 720,
    })?;
    settings.write(&Window {
        width: 3840,
        height: 2160,
    })?;
    settings.reload()?;
    println!("Current: {:?}", settings.read::<Window>()?);

    println!("Backup at {}", settings.backup_path().display());
    settings.restore_from_backup()?;
    settings.reload()?;
    println!("Restored: {:?}", settings.read::<Window>()?);

    Ok(())
}
