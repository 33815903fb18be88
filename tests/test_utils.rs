use optcalc_lib::{bs_prem, BsModel, OptionType};

pub const EPSILON: f64 = 1e-6;

/// (spot, strike, vol, rate, time) quotes taken from the calculator walkthrough
pub fn walkthrough_quotes() -> Vec<(f64, f64, f64, f64, f64)> {
    vec![
        (100.0, 105.0, 0.25, 0.05, 0.25),
        (110.0, 100.0, 0.20, 0.03, 0.5),
        (90.0, 100.0, 0.30, 0.04, 0.25),
        (100.0, 100.0, 0.15, 0.02, 1.0),
        (100.0, 100.0, 0.20, 0.05, 1.0),
    ]
}

/// Call and put premiums for the same inputs
pub fn call_and_put(spot: f64, strike: f64, vol: f64, rate: f64, time: f64) -> (f64, f64) {
    let model = BsModel::new(spot, vol);
    let call = bs_prem(model, strike, rate, time, OptionType::Call).expect("call pricing failed");
    let put = bs_prem(model, strike, rate, time, OptionType::Put).expect("put pricing failed");
    (call, put)
}

/// Write `contents` to a fresh file under the system temp dir and return its path
#[allow(dead_code)] // Not every test binary loads files
pub fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("optcalc-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write temp file");
    path
}
