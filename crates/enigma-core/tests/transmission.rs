use rand::rngs::StdRng;
use rand::SeedableRng;

use enigma_core::validate::validate_key;
use enigma_core::key::key::KeyFile;
use enigma_core::{EnigmaKey, Indicator, NonLetters, ReflectorModel, RotorModel, Setting, Transmission};

fn station_key() -> EnigmaKey {
    validate_key(KeyFile {
        rotor_names: vec![RotorModel::I, RotorModel::II, RotorModel::III],
        ring_settings: vec![Setting::Index(1); 3],
        reflector_type: ReflectorModel::B,
        plugboard_connections: "AB FD CH LO PW".into(),
    })
    .unwrap()
}

fn ind(s: &str) -> Indicator {
    Indicator::parse(s).unwrap()
}

#[test]
fn encrypt_with_explicit_indicators() {
    let mut m = station_key().default_machine().unwrap();
    let t = m
        .encrypt_transmission("HELLOHOWAREYOU", Some(ind("WZA")), Some(ind("SXT")))
        .unwrap();

    assert_eq!(
        t,
        Transmission {
            start_position: ind("WZA"),
            encrypted_key: ind("IGI"),
            ciphertext: "EVIVKEGIPXXOQZ".into(),
        }
    );
    assert_eq!(t.header(), "WZA IGI");
}

#[test]
fn decrypt_recovers_message() {
    let mut m = station_key().default_machine().unwrap();
    let plain = m
        .decrypt_transmission(ind("WZA"), ind("IGI"), "EVIVKEGIPXXOQZ")
        .unwrap();
    assert_eq!(plain, "HELLOHOWAREYOU");
}

#[test]
fn protocol_ignores_construction_positions() {
    let k = station_key();
    let mut a = k.machine(ind("QQQ")).unwrap();
    let mut b = k.default_machine().unwrap();

    let ta = a.encrypt_transmission("ATTACK AT DAWN", Some(ind("WZA")), Some(ind("SXT"))).unwrap();
    let tb = b.encrypt_transmission("ATTACK AT DAWN", Some(ind("WZA")), Some(ind("SXT"))).unwrap();
    assert_eq!(ta, tb);
}

#[test]
fn random_indicators_have_the_right_shape() {
    let mut m = station_key().default_machine().unwrap();
    let t = m.encrypt_transmission("HELLOHOWAREYOU", None, None).unwrap();

    assert_eq!(t.start_position.to_string().len(), 3);
    assert_eq!(t.encrypted_key.to_string().len(), 3);
    assert_eq!(t.ciphertext.len(), "HELLOHOWAREYOU".len());

    let mut rx = station_key().default_machine().unwrap();
    assert_eq!(rx.receive(&t).unwrap(), "HELLOHOWAREYOU");
}

#[test]
fn seeded_rng_is_reproducible() {
    let k = station_key();
    let run = |seed| {
        let mut m = k.default_machine().unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        m.encrypt_transmission_with("KEEP THIS QUIET", None, None, NonLetters::Preserve, &mut rng)
            .unwrap()
    };

    assert_eq!(run(7), run(7));

    let t = run(7);
    let mut rx = k.default_machine().unwrap();
    assert_eq!(rx.receive(&t).unwrap(), "KEEP THIS QUIET");
}

#[test]
fn only_the_missing_indicator_is_drawn() {
    let mut m = station_key().default_machine().unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let t = m
        .encrypt_transmission_with("HI", Some(ind("WZA")), None, NonLetters::Preserve, &mut rng)
        .unwrap();
    assert_eq!(t.start_position, ind("WZA"));
}

#[test]
fn stripped_transmission_drops_spaces() {
    let mut m = station_key().default_machine().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let t = m
        .encrypt_transmission_with("HELLO HOW ARE YOU", Some(ind("WZA")), Some(ind("SXT")), NonLetters::Strip, &mut rng)
        .unwrap();
    assert_eq!(t.ciphertext, "EVIVKEGIPXXOQZ");
}

#[test]
fn indicator_must_be_three_letters() {
    assert!(Indicator::parse("AB").is_err());
    assert!(Indicator::parse("ABCD").is_err());
    assert!(Indicator::parse("A1C").is_err());
    assert_eq!(ind("wza"), ind("WZA"));
}

#[test]
fn each_phase_resets_the_rotors_once() {
    let mut tx = station_key().default_machine().unwrap();
    let before = tx.stats;
    let t = tx
        .encrypt_transmission("HELLOHOWAREYOU", Some(ind("WZA")), Some(ind("SXT")))
        .unwrap();
    assert_eq!(tx.stats.resets - before.resets, 2);
    assert_eq!(tx.stats.keypresses - before.keypresses, 3 + 14);

    let mut rx = station_key().default_machine().unwrap();
    let before = rx.stats;
    rx.receive(&t).unwrap();
    assert_eq!(rx.stats.resets - before.resets, 2);

    rx.update_rotor_positions("AAA").unwrap();
    assert_eq!(rx.stats.resets - before.resets, 3);
}
