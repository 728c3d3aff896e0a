use super::classify::classify_into;
use super::render::render_into;
use super::{QueryArg, QueryRequest};
use crate::diagnostics::{Diagnostics, Policy};
use crate::{PassResult, Result};

/// Classifies and renders query calls under a diagnostics policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Assembler {
    policy: Policy,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for omitted input.
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for `policy(Policy::Strict)` when `strict` is set.
    pub fn strict(self, strict: bool) -> Self {
        self.policy(if strict { Policy::Strict } else { Policy::Lenient })
    }

    /// Classify and render a call.
    pub fn assemble(&self, args: &[QueryArg<'_>]) -> Result<String> {
        let (text, diagnostics) = self.assemble_with_diagnostics(args)?;
        self.policy.check(text, diagnostics)
    }

    /// Classify and render a call, returning everything that was omitted.
    ///
    /// Never rejects; the policy is applied by [`assemble`](Self::assemble).
    pub fn assemble_with_diagnostics(&self, args: &[QueryArg<'_>]) -> PassResult<String> {
        let mut diagnostics = Diagnostics::new();
        let request = classify_into(args, &mut diagnostics);
        let text = render_into(&request, &mut diagnostics)?;
        Ok((text, diagnostics))
    }

    /// Render an already classified request.
    pub fn render(&self, request: &QueryRequest<'_>) -> Result<String> {
        let mut diagnostics = Diagnostics::new();
        let text = render_into(request, &mut diagnostics)?;
        self.policy.check(text, diagnostics)
    }
}
