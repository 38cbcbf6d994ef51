//! Plain-text rendering of a finished run.
//!
//! Reads an [`Output`] and never feeds anything back into the engine.

use std::fmt::{self, Write};

use bivalve_core::oyster::constants::DAYS_PER_YEAR;
use bivalve_core::Output;

/// Default sampling interval of the table: one row per month.
pub const DEFAULT_EVERY_DAYS: f64 = DAYS_PER_YEAR / 12.0;

/// Indices of the rows to print: every `every_days` of simulated time, plus
/// the final step.
pub fn sample_indices(time: &[f64], every_days: f64) -> Vec<usize> {
    let Some(last) = time.len().checked_sub(1) else {
        return Vec::new();
    };
    let mut rows = Vec::new();
    let mut next = 0.0;
    for (i, &t) in time.iter().enumerate() {
        if t >= next {
            rows.push(i);
            next = t + every_days;
        }
    }
    if rows.last() != Some(&last) {
        rows.push(last);
    }
    rows
}

/// Render mass pools against time in years, followed by the budget terms of
/// the final transition.
pub fn render_table(output: &Output, every_days: f64) -> Result<String, fmt::Error> {
    let t = &output.trajectory;
    let mut s = String::new();

    writeln!(
        s,
        "{:>7} | {:>9} | {:>9} | {:>9} | {:>9}",
        "Years", "B", "SOMA", "RESGON", "SHELL"
    )?;
    writeln!(s, "--------|-----------|-----------|-----------|----------")?;
    for i in sample_indices(&t.time, every_days) {
        writeln!(
            s,
            "{:>7.3} | {:>9.5} | {:>9.5} | {:>9.5} | {:>9.5}",
            t.time[i] / DAYS_PER_YEAR,
            t.biomass[i],
            t.soma[i],
            t.resgon[i],
            t.shell[i],
        )?;
    }

    let f = &output.final_fluxes;
    writeln!(s, "\nFinal transition:")?;
    writeln!(s, "  INGorg  = {:.6e}", f.ing_org)?;
    writeln!(s, "  INGtemp = {:.6e}", f.ing_temp)?;
    writeln!(s, "  ABSorg  = {:.6e}", f.abs_org)?;
    writeln!(s, "  maxSOMA = {:.6e}", f.max_soma)?;
    writeln!(s, "  RESP    = {:.6e}", f.resp)?;
    Ok(s)
}
