use std::collections::VecDeque;

use crate::errors::errors::ErrorImpl;

pub const REGISTER_COUNT: usize = 26;

/// The target machine's named registers, handed out `a` first.
#[derive(Debug, Clone)]
pub struct RegisterPool {
    available: VecDeque<char>,
}

impl RegisterPool {
    pub fn new() -> Self {
        RegisterPool {
            available: ('a'..='z').collect(),
        }
    }

    pub fn new_register(&mut self) -> Result<char, ErrorImpl> {
        self.available
            .pop_front()
            .ok_or(ErrorImpl::RegistersExhausted)
    }

    pub fn remaining(&self) -> usize {
        self.available.len()
    }
}

impl Default for RegisterPool {
    fn default() -> Self {
        RegisterPool::new()
    }
}
