#![no_main]

use gfx_math::{Matrix4, matrix::fuzzing::fuzz_test_matrix_inversion};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|matrix: Matrix4| {
    fuzz_test_matrix_inversion(matrix);
});
