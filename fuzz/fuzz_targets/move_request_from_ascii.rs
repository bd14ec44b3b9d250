#![no_main]

use chess_referee::MoveRequest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(request) = MoveRequest::from_ascii(data) {
        let roundtripped =
            MoveRequest::from_ascii(request.to_string().as_bytes()).expect("roundtrip");
        assert_eq!(request, roundtripped);
    }
});
