use rif::format::RifFormat;
use rif::generator::RifGenerator;
use rif::{Rif, SubjectType, validation_report};

fn main() {
    // RUST_LOG=rif=debug shows why each input was rejected
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== RIF Validation ===\n");

    let inputs = [
        "V113502963",
        " g200001100 ",
        "J000029679",
        "V113502960", // wrong check digit
        "X123456789", // unknown prefix
        "J12345678",  // too short
    ];

    for input in &inputs {
        match Rif::parse(input) {
            Ok(rif) => println!(
                "  {input:?} => valid ({}, body={}, digit={})",
                rif.subject_type().label(),
                rif.body(),
                rif.check_digit()
            ),
            Err(e) => println!("  {input:?} => INVALID: {e}"),
        }
    }

    println!("\n=== Structural Diagnostics ===\n");

    for input in ["X12A", "J1234A6789", "J12345678X"] {
        let report = validation_report(input);
        println!("  {input}: {report}");
        match serde_json::to_string(&report) {
            Ok(json) => println!("    {json}"),
            Err(e) => println!("    (json error: {e})"),
        }
    }

    println!("\n=== Renderings ===\n");

    if let Ok(rif) = Rif::parse("J000029679") {
        for format in RifFormat::ALL {
            println!("  {:<16} {}", format.name(), rif.format(format));
        }
    }

    println!("\n=== Generation ===\n");

    let mut generator = RifGenerator::new();
    for rif in generator.one_of_each_type() {
        println!("  {} {}", rif.format(RifFormat::Standard), rif.subject_type().label());
    }
    match generator.sequential(123, Some(SubjectType::Government)) {
        Ok(rif) => println!("  sequential 123 => {rif}"),
        Err(e) => println!("  sequential 123 => ERROR: {e}"),
    }
}
