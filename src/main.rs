//! Baryon catalog
//!
//! Builds the named baryons of the quark model and logs their quark content.

use particle_physics::{Baryon, BaryonError, Quark, UpDown};

/// Log one catalog entry, or the reason it could not be built
fn log_baryon(name: &str, baryon: Result<Baryon, BaryonError>) {
    match baryon {
        Ok(b) => log::info!(
            "  {:<10} {}  charge={:+.2} spin={:+.1} S={} mass={:.3e} eV",
            name,
            b,
            b.charge(),
            b.spin(),
            b.strangeness(),
            b.mass()
        ),
        Err(e) => log::warn!("  {:<10} unavailable: {}", name, e),
    }
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Building baryon catalog...");

    let nucleon = Baryon::nucleon(1);
    log::info!("✓ Nucleon(+1): {}", nucleon);

    let strange = Quark::gen2(false, true);
    let catalog = [
        ("proton", Ok(Baryon::proton())),
        ("neutron", Ok(Baryon::neutron())),
        ("delta", Ok(Baryon::delta(UpDown::from_bits(0b011)))),
        ("sigma*", Baryon::hyperon(1, false, UpDown::from_bits(0b01))),
        ("xi", Baryon::hyperon(2, true, UpDown::from_bits(0b1))),
        ("omega", Baryon::hyperon(3, false, UpDown::default())),
        ("lambda", Baryon::lambda(strange)),
        ("sigma", Baryon::sigma(strange, false)),
    ];

    for (name, baryon) in catalog {
        log_baryon(name, baryon);
    }

    log::info!("✓ Catalog complete");
}
