//! Every case runs twice: as written, where it has to pass, and with `INTRODUCE_ERROR`, where it
//! has to end in the listed verdict. The warn cases have to pass either way.

use microstrain_test::runner::CaseVerdict;
use microstrain_test::{
    check_buffer_eq, check_cstr_eq, format_hex, require_buffer_eq, require_cstr_eq,
    warn_buffer_eq, warn_cstr_eq, Recorder, TestCase,
};

pub struct Case {
    pub clean: TestCase,
    pub with_error: TestCase,
    pub verdict_with_error: CaseVerdict,
}

macro_rules! case {
    ($suite:literal, $name:literal, $body:ident, $verdict:ident) => {
        Case {
            clean: TestCase::new($suite, $name, $body::<false>),
            with_error: TestCase::new($suite, $name, $body::<true>),
            verdict_with_error: CaseVerdict::$verdict,
        }
    };
}

pub static CASES: [Case; 7] = [
    case!("strings", "model name field", model_name, Failed),
    case!("strings", "warn on firmware string", firmware_string, Passed),
    case!("strings", "require serial number", serial_number, Aborted),
    case!("buffers", "packet header", packet_header, Failed),
    case!("buffers", "warn on payload", payload, Passed),
    case!("buffers", "require checksum", checksum, Aborted),
    case!("hex", "render bytes", render_bytes, Failed),
];

fn field(text: &[u8]) -> [u8; 16] {
    let mut field = [0u8; 16];
    field[..text.len()].copy_from_slice(text);
    field
}

fn model_name<const INTRODUCE_ERROR: bool>(host: &mut Recorder) -> microstrain_test::Result {
    let name = if INTRODUCE_ERROR { field(b"3DM-GQ7-GX") } else { field(b"3DM-GQ7") };
    check_cstr_eq!(host, name, c"3DM-GQ7");
    check_cstr_eq!(host, name[..3], "3DM");
    Ok(())
}

fn firmware_string<const INTRODUCE_ERROR: bool>(host: &mut Recorder) -> microstrain_test::Result {
    let version = if INTRODUCE_ERROR { "1.1.09" } else { "1.1.08" };
    warn_cstr_eq!(host, version, "1.1.08");
    Ok(())
}

fn serial_number<const INTRODUCE_ERROR: bool>(host: &mut Recorder) -> microstrain_test::Result {
    let serial = if INTRODUCE_ERROR { field(b"6251.") } else { field(b"6251.71") };
    require_cstr_eq!(host, serial, "6251.71");
    check_cstr_eq!(host, serial[..4], "6251");
    Ok(())
}

const PING: [u8; 8] = [0x75, 0x65, 0x01, 0x02, 0x02, 0x01, 0xE0, 0xC6];

fn packet_header<const INTRODUCE_ERROR: bool>(host: &mut Recorder) -> microstrain_test::Result {
    let mut packet = PING;
    if INTRODUCE_ERROR {
        packet[1] = 0x66;
    }
    check_buffer_eq!(host, packet, [0x75u8, 0x65, 0x01, 0x02], 4);
    check_buffer_eq!(host, packet[4..], PING[4..], 4);
    Ok(())
}

fn payload<const INTRODUCE_ERROR: bool>(host: &mut Recorder) -> microstrain_test::Result {
    let mut packet = PING;
    if INTRODUCE_ERROR {
        packet[5] ^= 0xFF;
    }
    warn_buffer_eq!(host, packet[4..6], [0x02u8, 0x01], 2);
    Ok(())
}

fn checksum<const INTRODUCE_ERROR: bool>(host: &mut Recorder) -> microstrain_test::Result {
    let mut packet = PING.to_vec();
    if INTRODUCE_ERROR {
        packet.truncate(7);
    }
    require_buffer_eq!(host, packet[6..], [0xE0u8, 0xC6], 2);
    check_buffer_eq!(host, packet, PING, PING.len());
    Ok(())
}

fn render_bytes<const INTRODUCE_ERROR: bool>(host: &mut Recorder) -> microstrain_test::Result {
    let expected = if INTRODUCE_ERROR { "ab01" } else { "AB01" };
    check_cstr_eq!(host, format_hex(&[0xAB, 0x01]), expected);
    check_cstr_eq!(host, format_hex(&[]), "");
    Ok(())
}
