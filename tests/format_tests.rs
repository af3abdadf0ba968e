#![cfg(feature = "format")]

use rif::Rif;
use rif::format::{RifFormat, custom};

fn rif(raw: &str) -> Rif {
    Rif::parse(raw).unwrap()
}

#[test]
fn standard_for_each_vector() {
    assert_eq!(rif("V113502963").format(RifFormat::Standard), "V-11350296-3");
    assert_eq!(rif("G200001100").format(RifFormat::Standard), "G-20000110-0");
    assert_eq!(rif("J000029679").format(RifFormat::Standard), "J-00002967-9");
}

#[test]
fn spaced_groups_two_three_three() {
    insta::assert_snapshot!(rif("V113502963").format(RifFormat::Spaced), @"V 11 350 296 3");
}

#[test]
fn dotted_uses_thousands_separators() {
    insta::assert_snapshot!(rif("V113502963").format(RifFormat::Dotted), @"V-11.350.296-3");
    insta::assert_snapshot!(rif("J000029679").format(RifFormat::Dotted), @"J-2.967-9");
}

#[test]
fn descriptions_per_type() {
    insta::assert_snapshot!(
        rif("G200001100").format(RifFormat::WithDescription),
        @"G-20000110-0 (Gobierno)"
    );
    insta::assert_snapshot!(
        rif("C000029679").format(RifFormat::WithDescription),
        @"C-00002967-9 (Consejo Comunal)"
    );
}

#[test]
fn legal_document_form() {
    insta::assert_snapshot!(rif("G200001100").format(RifFormat::Legal), @"R.I.F. G-20000110-0");
}

#[test]
fn all_renderings_of_one_rif() {
    let r = rif("J000029679");
    let rendered: Vec<String> = RifFormat::ALL
        .iter()
        .map(|f| format!("{f}: {}", r.format(*f)))
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    standard: J-00002967-9
    spaced: J 00 002 967 9
    withDescription: J-00002967-9 (Persona Jurídica)
    compact: J000029679
    database: J000029679
    dotted: J-2.967-9
    invoice: J-00002967-9
    legal: R.I.F. J-00002967-9
    ");
}

#[test]
fn custom_separators() {
    let r = rif("J000029679");
    assert_eq!(custom(&r, "/"), "J/00002967/9");
    assert_eq!(custom(&r, " "), "J 00002967 9");
    assert_eq!(custom(&r, " | "), "J | 00002967 | 9");
}

#[test]
fn formatting_a_normalized_input() {
    assert_eq!(rif(" j000029679 ").format(RifFormat::Compact), "J000029679");
}

#[test]
fn lenient_names_fall_back_to_standard() {
    let r = rif("J000029679");
    assert_eq!(r.format(RifFormat::from_name("unknown")), "J-00002967-9");
    assert_eq!(r.format(RifFormat::from_name("spaced")), "J 00 002 967 9");
}

#[test]
fn strict_names_reject_unknown() {
    let err = "Standard".parse::<RifFormat>().unwrap_err();
    assert_eq!(err.to_string(), "unknown RIF format 'Standard'");
}

#[test]
fn format_serializes_snake_case() {
    let json = serde_json::to_string(&RifFormat::WithDescription).unwrap();
    assert_eq!(json, "\"with_description\"");
}
