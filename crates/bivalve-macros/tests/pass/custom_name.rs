use bivalve_macros::Timeseries;

#[derive(Debug, Clone, Copy, Timeseries)]
#[timeseries(name = "Respiration")]
pub struct RespirationStep {
    pub temperature: f64,
    pub resp: f64,
}

fn main() {
    let r = RespirationStep { temperature: 20.0, resp: 4.45e-7 };
    let mut ts = Respiration::with_capacity(5);
    ts.push(&r);
    ts.push(&r);
    assert_eq!(ts.len(), 2);
    assert_eq!(ts.column("temperature").map(|c| c.len()), Some(2));
    assert_eq!(RespirationStep::field_names(), &["temperature", "resp"]);
}
