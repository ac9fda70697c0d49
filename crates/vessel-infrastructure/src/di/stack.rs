//! Per-resolution build stack
//!
//! Tracks the type identities under construction during one materialization.
//! A repeated identity is a cycle; a stack deeper than the configured limit
//! is rejected before it can exhaust the thread stack.

use vessel_domain::error::{Error, Result};

#[derive(Debug)]
pub(crate) struct BuildStack {
    frames: Vec<&'static str>,
    max_depth: usize,
}

impl BuildStack {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push `identity`, failing on a cycle or when the limit is reached
    pub(crate) fn enter(&mut self, identity: &'static str) -> Result<()> {
        if self.frames.contains(&identity) {
            let mut path: Vec<String> = self.frames.iter().map(ToString::to_string).collect();
            path.push(identity.to_string());
            return Err(Error::cyclic(path));
        }
        if self.frames.len() >= self.max_depth {
            return Err(Error::depth_exceeded(self.max_depth, identity));
        }
        self.frames.push(identity);
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.frames.pop();
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }
}
