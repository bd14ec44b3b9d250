#![no_main]

use chess_referee::ClickRequest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(request) = ClickRequest::from_ascii(data) {
        let roundtripped =
            ClickRequest::from_ascii(request.to_string().as_bytes()).expect("roundtrip");
        assert_eq!(request, roundtripped);
    }
});
