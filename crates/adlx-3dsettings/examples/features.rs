// Prints what the ADLX runtime reports for each 3D setting.
// Needs an AMD GPU with a driver that ships amdadlx64.dll.
// Run with RUST_LOG=debug to see why a query failed.

use adlx_3dsettings::{Adlx, FeatureKind, Gateway};

fn main() {
    env_logger::init();

    let gateway = Gateway::new(Adlx);
    if let Err(e) = gateway.ensure_initialized() {
        eprintln!("ADLX is unavailable: {e}");
        std::process::exit(1);
    }

    println!("ADLX 3D settings\n----------------");
    for kind in FeatureKind::ALL {
        match gateway.is_enabled(kind) {
            Ok(enabled) => println!("{kind}: {}", if enabled { "on" } else { "off" }),
            Err(e) => println!("{kind}: {e}"),
        }
    }
    match gateway.sharpness() {
        Ok(sharpness) => println!("Radeon Super Resolution sharpness: {sharpness}"),
        Err(e) => println!("Radeon Super Resolution sharpness: {e}"),
    }

    gateway.shutdown();
}
