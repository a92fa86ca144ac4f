//! The entry point: bring a formula into a requested normal form.

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::distrib::LimitExceeded;
use crate::{Formula, Kind, Result, VariableMap};

/// A normal form a formula can be brought into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalForm {
    /// Negation normal form.
    Nnf,
    /// Conjunctive normal form.
    Cnf,
    /// Disjunctive normal form.
    Dnf,
}

impl NormalForm {
    /// The connective at the root of the clausal shape, if this form has one.
    pub fn outer(self) -> Option<Kind> {
        match self {
            NormalForm::Nnf => None,
            NormalForm::Cnf => Some(Kind::And),
            NormalForm::Dnf => Some(Kind::Or),
        }
    }
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            NormalForm::Nnf => "NNF",
            NormalForm::Cnf => "CNF",
            NormalForm::Dnf => "DNF",
        };

        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub form: NormalForm,
    /// Re-wrap degenerate results into the three-level clausal shape.
    pub strict: bool,
    /// The number of literals the distributive expansion may generate, summed over the whole
    /// formula, before CNF conversion switches to the Tseitin encoding. 0 always uses the Tseitin
    /// encoding.
    pub tseitin_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            form: NormalForm::Cnf,
            strict: false,
            tseitin_threshold: usize::MAX,
        }
    }
}

impl Config {
    pub fn new(form: NormalForm) -> Self {
        Config {
            form,
            ..Config::default()
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn tseitin_threshold(mut self, threshold: usize) -> Self {
        self.tseitin_threshold = threshold;
        self
    }
}

/// A formula together with the normal form it was brought into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub formula: Formula,
    pub form: NormalForm,
    /// Whether `formula` has the strict clausal shape.
    pub clausal: bool,
    /// Set when auxiliary variables were introduced: `formula` is then only equisatisfiable with
    /// the input.
    pub equisatisfiable: bool,
    /// The variables of `formula`, including any auxiliary ones.
    pub variables: VariableMap,
}

impl Formula {
    /// Brings a copy of this formula into the normal form described by `config`, over the
    /// variables of the formula itself.
    pub fn to_normal_form(&self, config: &Config) -> Result<Normalized> {
        self.to_normal_form_with(&VariableMap::of(self), config)
    }

    /// Like [`Formula::to_normal_form`], over a given variable map. Every variable of the formula
    /// must be in `vars`.
    #[instrument(level = "debug", skip_all, fields(form = %config.form, strict = config.strict))]
    pub fn to_normal_form_with(&self, vars: &VariableMap, config: &Config) -> Result<Normalized> {
        vars.check(self)?;

        let mut form = self.clone();
        let mut variables = vars.clone();
        let mut equisatisfiable = false;

        if form.classify(config.form).normal {
            debug!("already in normal form");
        } else {
            form.make_negation_normal_form()?;
            form.simplify();
            trace!(nnf = %form);

            if let Some(outer) = config.form.outer() {
                // Tseitin only produces CNF.
                let limit = match outer {
                    Kind::And => config.tseitin_threshold,
                    _ => usize::MAX,
                };

                if limit == 0 {
                    debug!("encoding with auxiliary variables");
                    let tseitin = form.tseitin_encoding(&variables)?;
                    form = tseitin.formula;
                    variables = tseitin.variables;
                    equisatisfiable = true;
                } else {
                    let nnf = (limit != usize::MAX).then(|| form.clone());
                    match (form.make_distributive_normal_form(outer, limit), nnf) {
                        (Ok(()), _) => {}
                        (Err(LimitExceeded), Some(nnf)) => {
                            debug!(limit, "falling back to auxiliary variables");
                            let tseitin = nnf.tseitin_encoding(&variables)?;
                            form = tseitin.formula;
                            variables = tseitin.variables;
                            equisatisfiable = true;
                        }
                        (Err(LimitExceeded), None) => unreachable!("unbounded expansion"),
                    }
                }

                form.simplify();
            }
        }

        if let (true, Some(outer)) = (config.strict, config.form.outer()) {
            if !form.classify(config.form).clausal {
                form.make_clausal(outer);
            }
        }

        let classification = form.classify(config.form);
        debug_assert!(classification.normal, "{} is not in {}", form, config.form);
        trace!(result = %form, clausal = classification.clausal);

        Ok(Normalized {
            formula: form,
            form: config.form,
            clausal: classification.clausal,
            equisatisfiable,
            variables,
        })
    }

    pub fn to_nnf(&self) -> Result<Formula> {
        Ok(self.to_normal_form(&Config::new(NormalForm::Nnf))?.formula)
    }

    pub fn to_cnf(&self) -> Result<Formula> {
        Ok(self.to_normal_form(&Config::new(NormalForm::Cnf))?.formula)
    }

    pub fn to_dnf(&self) -> Result<Formula> {
        Ok(self.to_normal_form(&Config::new(NormalForm::Dnf))?.formula)
    }

    pub fn is_nnf(&self) -> bool {
        self.classify(NormalForm::Nnf).normal
    }

    pub fn is_cnf(&self) -> bool {
        self.classify(NormalForm::Cnf).normal
    }

    pub fn is_dnf(&self) -> bool {
        self.classify(NormalForm::Dnf).normal
    }

    pub fn is_clausal(&self, form: NormalForm) -> bool {
        self.classify(form).clausal
    }
}
