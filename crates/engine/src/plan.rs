//! Order of the seed steps.
//!
//! Each [`SeedStep`] declares the steps whose rows it references. The plan
//! runs them in topological order; among steps that are ready at the same
//! time the one declared first wins, so the resulting order is stable.

use std::fmt;

use migration::{TableCreateStatement, tables};

use crate::{EngineError, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedStep {
    Shareholders,
    Questions,
    Choices,
    Answers,
    Users,
    Customers,
    Invoices,
    Revenue,
}

impl SeedStep {
    /// Declaration order.
    pub const ALL: [SeedStep; 8] = [
        SeedStep::Shareholders,
        SeedStep::Questions,
        SeedStep::Choices,
        SeedStep::Answers,
        SeedStep::Users,
        SeedStep::Customers,
        SeedStep::Invoices,
        SeedStep::Revenue,
    ];

    /// Steps whose rows must exist before this step inserts.
    ///
    /// The schema declares no foreign keys, so this is the only place the
    /// references are enforced.
    pub fn depends_on(&self) -> &'static [SeedStep] {
        match self {
            SeedStep::Choices => &[SeedStep::Questions],
            SeedStep::Answers => &[
                SeedStep::Shareholders,
                SeedStep::Questions,
                SeedStep::Choices,
            ],
            SeedStep::Invoices => &[SeedStep::Customers],
            SeedStep::Shareholders
            | SeedStep::Questions
            | SeedStep::Users
            | SeedStep::Customers
            | SeedStep::Revenue => &[],
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            SeedStep::Shareholders => "shareholders",
            SeedStep::Questions => "questions",
            SeedStep::Choices => "choices",
            SeedStep::Answers => "answers",
            SeedStep::Users => "users",
            SeedStep::Customers => "customers",
            SeedStep::Invoices => "invoices",
            SeedStep::Revenue => "revenue",
        }
    }

    pub fn table(&self) -> TableCreateStatement {
        match self {
            SeedStep::Shareholders => tables::shareholders(),
            SeedStep::Questions => tables::questions(),
            SeedStep::Choices => tables::choices(),
            SeedStep::Answers => tables::answers(),
            SeedStep::Users => tables::users(),
            SeedStep::Customers => tables::customers(),
            SeedStep::Invoices => tables::invoices(),
            SeedStep::Revenue => tables::revenue(),
        }
    }
}

impl fmt::Display for SeedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.table_name())
    }
}

/// Steps in execution order.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedPlan {
    steps: Vec<SeedStep>,
}

impl SeedPlan {
    /// Plan over every step.
    pub fn new() -> ResultEngine<Self> {
        Self::with_dependencies(&SeedStep::ALL, |step| step.depends_on())
    }

    /// Order `steps` so every step comes after the steps `deps` returns for
    /// it. Dependencies outside `steps` are ignored.
    pub fn with_dependencies<F>(steps: &[SeedStep], deps: F) -> ResultEngine<Self>
    where
        F: Fn(&SeedStep) -> &'static [SeedStep],
    {
        let mut pending: Vec<(SeedStep, Vec<SeedStep>)> = steps
            .iter()
            .map(|step| {
                let wanted = deps(step)
                    .iter()
                    .copied()
                    .filter(|dep| steps.contains(dep))
                    .collect();
                (*step, wanted)
            })
            .collect();
        let mut ordered = Vec::with_capacity(steps.len());

        while !pending.is_empty() {
            let Some(ready) = pending.iter().position(|(_, wanted)| wanted.is_empty()) else {
                let stuck: Vec<String> = pending.iter().map(|(s, _)| s.to_string()).collect();
                return Err(EngineError::InvalidPlan(format!(
                    "dependency cycle between {}",
                    stuck.join(", ")
                )));
            };

            let (step, _) = pending.remove(ready);
            for (_, wanted) in pending.iter_mut() {
                wanted.retain(|dep| *dep != step);
            }
            ordered.push(step);
        }

        Ok(Self { steps: ordered })
    }

    pub fn steps(&self) -> &[SeedStep] {
        &self.steps
    }
}
