use std::path::Path;

use enigma_core::key::format::{decode_for_path, decode_json, decode_yaml, encode_json, encode_yaml, key_id_hex};
use enigma_core::{EnigmaError, Indicator, ReflectorModel, RotorModel, Setting};

const JSON: &str = r#"{
    "rotor_names": [
        "I",
        "II",
        "III"
    ],
    "ring_settings": [
        1,
        4,
        6
    ],
    "reflector_type": "B",
    "plugboard_connections": "AB NK"
}
"#;

const YAML: &str = r#"rotor_names:
  - "I"
  - "II"
  - "III"
ring_settings:
  - 1
  - 4
  - 6
reflector_type: B
plugboard_connections: "AB NK"
"#;

#[test]
fn json_key_decodes() {
    let k = decode_json(JSON).unwrap();
    assert_eq!(k.rotor_names, [RotorModel::I, RotorModel::II, RotorModel::III]);
    assert_eq!(
        k.ring_settings,
        [Setting::Index(1), Setting::Index(4), Setting::Index(6)]
    );
    assert_eq!(k.reflector_type, ReflectorModel::B);
    assert_eq!(k.plugboard_connections, "AB NK");
}

#[test]
fn yaml_and_json_agree() {
    assert_eq!(decode_yaml(YAML).unwrap(), decode_json(JSON).unwrap());
}

#[test]
fn dispatch_on_extension() {
    let a = decode_for_path(Path::new("keys/today.json"), JSON).unwrap();
    let b = decode_for_path(Path::new("keys/today.yml"), YAML).unwrap();
    let c = decode_for_path(Path::new("keys/today.YAML"), YAML).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);

    let err = decode_for_path(Path::new("keys/today.toml"), JSON).unwrap_err();
    assert!(matches!(err, EnigmaError::KeyFormat(_)));
}

#[test]
fn plugboard_is_optional() {
    let k = decode_json(r#"{"rotor_names":["IV","V","VI"],"ring_settings":[0,0,0],"reflector_type":"I"}"#)
        .unwrap();
    assert_eq!(k.plugboard_connections, "");
    assert_eq!(k.reflector_type, ReflectorModel::Identity);
}

#[test]
fn letter_ring_settings_are_canonicalised() {
    let by_letter = decode_json(
        r#"{"rotor_names":["I","II","III"],"ring_settings":["B","e",32],"reflector_type":"B","plugboard_connections":"AB NK"}"#,
    )
    .unwrap();
    let by_index = decode_json(JSON).unwrap();
    assert_eq!(by_letter, by_index);
    assert_eq!(key_id_hex(&by_letter).unwrap(), key_id_hex(&by_index).unwrap());
}

#[test]
fn wrong_counts_fail_validation() {
    let err = decode_json(r#"{"rotor_names":["I","II"],"ring_settings":[0,0,0],"reflector_type":"B"}"#)
        .unwrap_err();
    assert!(matches!(err, EnigmaError::Validation(_)));

    let err = decode_json(r#"{"rotor_names":["I","II","III"],"ring_settings":[0],"reflector_type":"B"}"#)
        .unwrap_err();
    assert!(matches!(err, EnigmaError::Validation(_)));
}

#[test]
fn unknown_rotor_is_a_json_error() {
    let err = decode_json(r#"{"rotor_names":["I","II","IX"],"ring_settings":[0,0,0],"reflector_type":"B"}"#)
        .unwrap_err();
    assert!(matches!(err, EnigmaError::Json(_)));
}

#[test]
fn bad_plugboard_fails_at_decode() {
    let err = decode_json(
        r#"{"rotor_names":["I","II","III"],"ring_settings":[0,0,0],"reflector_type":"B","plugboard_connections":"AB BC"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, EnigmaError::DuplicateConnection { letter: 'B' }));
}

#[test]
fn encoders_round_trip() {
    let k = decode_json(JSON).unwrap();
    assert_eq!(decode_json(&encode_json(&k).unwrap()).unwrap(), k);
    assert_eq!(decode_yaml(&encode_yaml(&k).unwrap()).unwrap(), k);
}

#[test]
fn key_id_is_stable_hex() {
    let k = decode_json(JSON).unwrap();
    let id = key_id_hex(&k).unwrap();
    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(id, key_id_hex(&decode_yaml(YAML).unwrap()).unwrap());

    let mut other = k.clone();
    other.plugboard_connections = "AB".into();
    assert_ne!(id, key_id_hex(&other).unwrap());
}

#[test]
fn machine_from_key_keeps_roles_and_rings() {
    let k = decode_json(JSON).unwrap();
    let m = k.machine(Indicator::parse("XYZ").unwrap()).unwrap();

    assert_eq!(m.left().name(), "I");
    assert_eq!(m.middle().name(), "II");
    assert_eq!(m.right().name(), "III");
    assert_eq!(m.rings().to_string(), "BEG");
    assert_eq!(m.positions().to_string(), "XYZ");
    assert_eq!(m.plugboard().pairs().len(), 2);
}
