// src/workflow/plan.rs

use crate::errors::Result;
use crate::ops::Operation;
use crate::types::OperationKind;

/// What the caller asked for, in no particular order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub build: bool,
    pub test: bool,
    pub commit: Option<String>,
    pub tag: Option<String>,
}

impl Request {
    pub fn is_empty(&self) -> bool {
        !self.build && !self.test && self.commit.is_none() && self.tag.is_none()
    }
}

/// Operations to run, already in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Operation>,
}

impl Plan {
    /// Build the plan from an explicit ordered table of
    /// (requested?, operation) rows. The table order is the execution order,
    /// whatever order the flags were given in.
    pub fn from_request(request: &Request) -> Result<Self> {
        let table: [(bool, fn(&Request) -> Result<Operation>); 4] = [
            (request.build, |_| Ok(Operation::Build)),
            (request.test, |_| Ok(Operation::Test)),
            (request.commit.is_some(), |r| {
                Operation::commit(r.commit.clone().unwrap_or_default())
            }),
            (request.tag.is_some(), |r| {
                Operation::tag(r.tag.clone().unwrap_or_default())
            }),
        ];

        let mut steps = Vec::new();
        for (requested, make) in table {
            if requested {
                steps.push(make(request)?);
            }
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Operation] {
        &self.steps
    }

    pub fn kinds(&self) -> Vec<OperationKind> {
        self.steps.iter().map(Operation::kind).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
