#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through both member policies.  Err results are
    // expected and fine; what we verify is no panics and no wild output.
    let _ = gzdec::decode(data);

    let opts = gzdec::DecodeOptions {
        member_policy: gzdec::MemberPolicy::Concatenate,
    };
    let _ = gzdec::decode_with(data, &opts);
});
