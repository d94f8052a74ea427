//! The smoke sequence: a fixed list of statements committed one at a time.
//!
//! Each step is one POST to the transactional endpoint. The raw response
//! body goes to `out` followed by a newline; diagnostics go to the tracing
//! subscriber so stdout stays machine-readable.

use std::io::Write;

use graphsmoke_client::{mutations, queries, GraphClient, Statement};

use crate::error::Result;

/// One named statement in the smoke sequence.
#[derive(Debug)]
pub struct Step {
    pub name: &'static str,
    pub statement: Statement,
}

/// The create → read → delete smoke cycle.
pub fn smoke_steps(include_stats: bool) -> Vec<Step> {
    let steps = vec![
        Step {
            name: "create-node",
            statement: mutations::create_empty_node(),
        },
        Step {
            name: "list-nodes",
            statement: queries::all_nodes(),
        },
        Step {
            name: "delete-all",
            statement: mutations::detach_delete_all(),
        },
    ];

    if include_stats {
        steps
            .into_iter()
            .map(|s| Step {
                name: s.name,
                statement: s.statement.with_stats(),
            })
            .collect()
    } else {
        steps
    }
}

/// What happened across one run of a sequence.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub total: usize,
    pub attempted: usize,
    pub failed: usize,
}

/// Commit each step in order, writing every response body to `out`.
///
/// A failed step counts in the report but does not stop the run unless
/// `fail_fast` is set. Transport failures produce no body, so nothing is
/// written for that step.
pub async fn run_sequence<W: Write>(
    client: &GraphClient,
    steps: Vec<Step>,
    fail_fast: bool,
    out: &mut W,
) -> Result<RunReport> {
    let mut report = RunReport {
        total: steps.len(),
        ..RunReport::default()
    };

    for step in steps {
        report.attempted += 1;
        tracing::info!(step = step.name, "Executing step");

        let failed = match client.commit(vec![step.statement]).await {
            Ok(outcome) => {
                writeln!(out, "{}", outcome.body)?;
                if outcome.is_ok() {
                    false
                } else {
                    if let Some(e) = outcome.first_error() {
                        tracing::error!(
                            step = step.name,
                            code = %e.code,
                            message = %e.message,
                            "Statement failed"
                        );
                    } else {
                        tracing::error!(
                            step = step.name,
                            status = outcome.status,
                            "Commit rejected"
                        );
                    }
                    true
                }
            }
            Err(e) => {
                tracing::error!(step = step.name, error = %e, "Step failed in transport");
                true
            }
        };

        if failed {
            report.failed += 1;
            if fail_fast {
                tracing::warn!(
                    remaining = report.total - report.attempted,
                    "Aborting sequence"
                );
                break;
            }
        }
    }

    out.flush()?;
    Ok(report)
}
