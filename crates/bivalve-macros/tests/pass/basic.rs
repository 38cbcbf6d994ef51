use bivalve_macros::Timeseries;

#[derive(Debug, Clone, Copy, PartialEq, Timeseries)]
pub struct Pools {
    pub soma: f64,
    pub resgon: f64,
    pub shell: f64,
}

fn main() {
    let p = Pools { soma: 0.3, resgon: 0.06, shell: 0.08 };
    let mut ts = PoolsSeries::with_capacity(10);
    assert!(ts.is_empty());
    assert!(ts.last().is_none());
    ts.push(&p);
    assert_eq!(ts.len(), 1);
    assert_eq!(ts.last(), Some(p));
    assert_eq!(ts.column("shell"), Some(&[0.08][..]));
    assert!(ts.column("biomass").is_none());
    assert_eq!(Pools::field_names(), &["soma", "resgon", "shell"]);
    assert_eq!(ts.columns().len(), 3);
}
