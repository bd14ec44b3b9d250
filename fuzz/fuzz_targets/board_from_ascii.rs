#![no_main]

use chess_referee::Position;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(pos) = Position::from_ascii(data) else {
        return;
    };
    let roundtripped = Position::from_ascii(pos.to_string().as_bytes()).expect("roundtrip");
    assert_eq!(pos.to_string(), roundtripped.to_string());
});
