use enigma_core::{EnigmaKey, Indicator, Machine, ReflectorModel, RotorModel, Setting};
use enigma_core::validate::validate_key;
use enigma_core::key::key::KeyFile;

fn key(rotors: [RotorModel; 3], rings: [u32; 3], reflector: ReflectorModel, plugs: &str) -> EnigmaKey {
    validate_key(KeyFile {
        rotor_names: rotors.to_vec(),
        ring_settings: rings.iter().map(|&r| Setting::Index(r)).collect(),
        reflector_type: reflector,
        plugboard_connections: plugs.to_string(),
    })
    .unwrap()
}

fn reference_machine(positions: &str) -> Machine {
    key(
        [RotorModel::I, RotorModel::II, RotorModel::III],
        [1, 1, 1],
        ReflectorModel::B,
        "",
    )
    .machine(Indicator::parse(positions).unwrap())
    .unwrap()
}

#[test]
fn five_a_keypresses() {
    let mut m = reference_machine("AAA");
    assert_eq!(m.encrypt("AAAAA").unwrap(), "EWTYX");
}

#[test]
fn hello_world() {
    let mut m = reference_machine("AAA");
    assert_eq!(m.encrypt("HELLOXWORLD").unwrap(), "LOFUHZZLZOM");
}

#[test]
fn empty_message() {
    let mut m = reference_machine("AAA");
    assert_eq!(m.encrypt("").unwrap(), "");
    assert_eq!(m.positions(), Indicator::AAA);
}

#[test]
fn lower_case_is_folded() {
    let mut m = reference_machine("AAA");
    assert_eq!(m.encrypt("toxcaps").unwrap(), "PESEXKY");
}

#[test]
fn long_message_through_double_steps() {
    let mut m = reference_machine("ZZZ");
    let message = "Tomorrow and tomorrow and tomorrow Creeps in this petty pace from day to day \
        To the last syllable of recorded time And all our yesterdays have lighted \
        fools The way to dusty death Out out brief candle Lifes but a walking shadow \
        a poor player That struts and frets his hour upon the stage And then is heard \
        no more It is a tale Told by an idiot full of sound and fury Signifying \
        nothing";

    let expected = "MCDDJUXX CJJ JIHHBBLX ZTS KWSSNDHR AMWKIY JP BIDH BOKYL NGZW PATP GIA EI TCM \
        MX NXJ CGHW EGNTOJXB TL JDHINBRZ HRNJ HCV RBA UHF MUILKNUMLO VXNA PRZCCNL \
        QCCCA MBP CNJ VQ XWYVS KJRML ECE QHE KGUCO JJHCJM FEPSX FOA C LOUGDOO EZOSIG \
        Y CTMJ MOFPIS WBTX NAHXIZ RUK ZGKXI VSF BWKU CVWH NZK TKDMW WHK MCFX JC PKCYI \
        IJ KWGP OH FC N PLTF ZRIA YH XT BJOHA SOVG WX GSZMZ GSJ AKVZ QTVWSAPOYZ \
        VKBTRCO";

    assert_eq!(m.encrypt(message).unwrap(), expected);
}

// Operation Barbarossa, 7 July 1941: II IV V, rings BUL, reflector B.
#[test]
fn barbarossa_message_deciphers() {
    let k = key(
        [RotorModel::II, RotorModel::IV, RotorModel::V],
        [1, 20, 11],
        ReflectorModel::B,
        "AV BS CG DL FU HZ IN KM OW RX",
    );
    let mut m = k.machine(Indicator::parse("BLA").unwrap()).unwrap();

    let cipher = "EDPUDNRGYSZRCXNUYTPOMRMBOFKTBZREZKMLXLVEFGUEYSIOZVEQMIKUBPMMYLKLTTDEISMD\
        ICAGYKUACTCDOMOHWXMUUIAUBSTSLRNBZSZWNRFXWFYSSXJZVIJHIDISHPRKLKAYUPADTXQSPINQMAT\
        LPIFSVKDASCTACDPBOPVHJK";
    let plain = "AUFKLXABTEILUNGXVONXKURTINOWAXKURTINOWAXNORDWESTLXSEBEZXSEBEZXUAFFLIEGERSTRA\
        SZERIQTUNGXDUBROWKIXDUBROWKIXOPOTSCHKAXOPOTSCHKAXUMXEINSAQTDREINULLXUHRANGETRETENX\
        ANGRIFFXINFXRGTX";

    assert_eq!(m.encrypt(cipher).unwrap(), plain);
}

#[test]
fn naval_rotors_with_two_notches() {
    let k = key(
        [RotorModel::VI, RotorModel::VII, RotorModel::VIII],
        [3, 7, 11],
        ReflectorModel::C,
        "AB CD EF",
    );
    let start = Indicator::parse("QEV").unwrap();

    let mut tx = k.machine(start).unwrap();
    let c = tx.encrypt("THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG").unwrap();
    assert_eq!(c, "OKQ OARDC QHASY WED ROYFJ QGRD JPV QYJO NFF");

    let mut rx = k.machine(start).unwrap();
    assert_eq!(rx.encrypt(&c).unwrap(), "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG");
}

#[test]
fn reset_replays_the_same_letter() {
    let mut m = reference_machine("AAA");
    let first = m.encipher_char('A').unwrap();

    m.update_rotor_positions("AAA").unwrap();
    let second = m.encipher_char('A').unwrap();

    assert_eq!(first, 'E');
    assert_eq!(first, second);
}
