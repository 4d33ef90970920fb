//! Demo configuration read from the environment.

use std::fmt;
use std::str::FromStr;

use anyhow::Context;

/// Comma-separated list of sections to run. Unset or empty runs everything.
pub const SECTIONS_VAR: &str = "GUARDRAIL_DEMO_SECTIONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Account,
    Player,
    Car,
    Fleet,
}

impl Section {
    pub const ALL: [Section; 4] = [Self::Account, Self::Player, Self::Car, Self::Fleet];

    fn as_str(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Player => "player",
            Self::Car => "car",
            Self::Fleet => "fleet",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unknown demo section: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    sections: Vec<Section>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(SECTIONS_VAR) {
            Ok(raw) => Self::parse(&raw).with_context(|| format!("reading {SECTIONS_VAR}")),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let sections = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Section::from_str)
            .collect::<anyhow::Result<Vec<_>>>()?;

        if sections.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
