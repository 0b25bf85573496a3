// src/tool_type.rs
//! Tool kinds (`axe`, `pickaxe`, ...) as interned tokens.

use std::fmt;

use crate::error::Result;
use crate::registry::{self, TokenRegistry};
use crate::token::Token;

/// A tool category. Two tool types are equal iff their names are equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolType(Token);

impl ToolType {
    pub const AXE: &'static str = "axe";
    pub const PICKAXE: &'static str = "pickaxe";
    pub const SHOVEL: &'static str = "shovel";

    /// The kinds every registry is expected to know about.
    pub const BUILTINS: [&'static str; 3] = [Self::AXE, Self::PICKAXE, Self::SHOVEL];

    pub fn get(registry: &TokenRegistry, name: &str) -> Result<Self> {
        registry.get_or_create(name).map(Self)
    }

    /// Resolve against the process-wide registry.
    pub fn global(name: &str) -> Result<Self> {
        Self::get(registry::global(), name)
    }

    /// Pre-register the builtin kinds, returning them in [`Self::BUILTINS`] order.
    pub fn register_builtins(registry: &TokenRegistry) -> Result<Vec<Self>> {
        Self::BUILTINS
            .iter()
            .map(|name| Self::get(registry, name))
            .collect()
    }

    pub fn axe(registry: &TokenRegistry) -> Result<Self> {
        Self::get(registry, Self::AXE)
    }

    pub fn pickaxe(registry: &TokenRegistry) -> Result<Self> {
        Self::get(registry, Self::PICKAXE)
    }

    pub fn shovel(registry: &TokenRegistry) -> Result<Self> {
        Self::get(registry, Self::SHOVEL)
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn token(&self) -> &Token {
        &self.0
    }
}

impl fmt::Debug for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ToolType").field(&self.name()).finish()
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
