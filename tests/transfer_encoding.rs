use tempfile::TempDir;

use scoutlog::{
    encode::{EncodeFault, ErrorCorrection, encode_for_transfer, encode_with_level, transfer_payload},
    record::CandidateRecord,
};

fn form() -> CandidateRecord {
    CandidateRecord {
        scouter_name: "A. Scout".to_string(),
        team_number: "118".to_string(),
        match_number: "12".to_string(),
        match_level: "Quals".to_string(),
        auto_points: "5".to_string(),
        teleop_points: "20".to_string(),
        endgame_points: "10".to_string(),
        team_station: "Red 1".to_string(),
        comments: "good auto\n".to_string(),
    }
}

#[test]
fn payload_is_tab_separated_in_transfer_order() {
    assert_eq!(
        transfer_payload(&form()),
        "A. Scout\t118\t12\tQuals\t5\t20\t10\tRed 1\tgood auto\n"
    );
}

#[test]
fn cleared_form_still_encodes() {
    let image = encode_for_transfer(&CandidateRecord::default()).expect("encode");
    assert_eq!(
        image.payload(),
        "\t\t\tSelect Match Level\t\t\t\tSelect Team Station\t\n"
    );
}

#[test]
fn invalid_fields_are_carried_verbatim() {
    let image = encode_for_transfer(&CandidateRecord {
        team_number: "abc".to_string(),
        auto_points: "-4".to_string(),
        ..form()
    })
    .expect("encode");
    assert!(image.payload().starts_with("A. Scout\tabc\t12\tQuals\t-4\t"));
}

#[test]
fn encoding_is_deterministic() {
    let a = encode_for_transfer(&form()).expect("a");
    let b = encode_for_transfer(&form()).expect("b");
    assert_eq!(a.payload(), b.payload());
    assert_eq!(a.width(), b.width());
    assert_eq!(a.to_terminal_string(), b.to_terminal_string());
}

#[test]
fn higher_correction_needs_at_least_as_many_modules() {
    let low = encode_with_level(&form(), ErrorCorrection::L).expect("low");
    let high = encode_with_level(&form(), ErrorCorrection::H).expect("high");
    assert!(high.width() >= low.width());
}

#[test]
fn writes_png() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("record.png");

    encode_for_transfer(&form())
        .expect("encode")
        .save_png(&path, 4)
        .expect("save");

    let bytes = std::fs::read(&path).expect("read");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn oversized_comments_exceed_capacity() {
    let err = encode_with_level(
        &CandidateRecord {
            comments: "x".repeat(4000),
            ..form()
        },
        ErrorCorrection::H,
    )
    .expect_err("too long");
    assert!(matches!(err, EncodeFault::Capacity(_)));
}

#[test]
fn png_into_missing_directory_fails() {
    let tmp = TempDir::new().expect("tmp");
    let err = encode_for_transfer(&form())
        .expect("encode")
        .save_png(&tmp.path().join("nope").join("record.png"), 4)
        .expect_err("no dir");
    assert!(matches!(err, EncodeFault::Image { .. }));
}
