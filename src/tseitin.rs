//! Size-bounded CNF through auxiliary variables.

use std::collections::HashMap;
use std::iter;

use contracts::*;
use tracing::debug;

use crate::{short::*, Error, Formula, Kind, List, Literal, Result, VariableMap};

/// Names of auxiliary variables start with this prefix, followed by a counter.
pub const AUX_PREFIX: &str = "__aux_";

/// A CNF built by [`Formula::tseitin`].
///
/// It is equisatisfiable with the input, not equivalent to it: it mentions auxiliary variables
/// the input does not have. Evaluated against values for the original variables only, a clause
/// over an auxiliary variable is unknown.
///
/// Structurally equal subformulas share one auxiliary variable, so `definitions` never holds the
/// same connective twice. Equality is order-sensitive: `a ∧ b` and `b ∧ a` get separate variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tseitin {
    pub formula: Formula,
    /// The input map extended with every auxiliary variable.
    pub variables: VariableMap,
    /// Each auxiliary variable with the connective it stands for, over literals. Operands are
    /// always defined before the connectives that use them.
    pub definitions: List<(String, Formula)>,
}

impl Formula {
    /// Encodes this formula into CNF with one auxiliary variable per compound subformula.
    pub fn tseitin(&self, vars: &VariableMap) -> Result<Tseitin> {
        let mut form = self.clone().negation_normal_form()?;
        form.simplify();
        form.tseitin_encoding(vars)
    }

    #[debug_requires(self.is_negation_normal_form())]
    pub(crate) fn tseitin_encoding(self, vars: &VariableMap) -> Result<Tseitin> {
        let mut encoder = TseitinEncoder {
            vars,
            counter: 0,
            cache: HashMap::new(),
            clauses: vec![],
            definitions: vec![],
        };

        match self {
            Formula::And(list) => {
                for form in list {
                    encoder.assert(form)?;
                }
            }
            form => encoder.assert(form)?,
        }

        debug!(
            aux = encoder.definitions.len(),
            clauses = encoder.clauses.len(),
            "tseitin encoding"
        );

        let aux = encoder.definitions.iter().map(|(name, _)| name.clone());
        let variables = vars.with_variables(aux);
        Ok(Tseitin {
            formula: Formula::And(encoder.clauses),
            variables,
            definitions: encoder.definitions,
        })
    }

    /// A literal, a constant, or a disjunction of those.
    fn is_clause(&self) -> bool {
        match self {
            Formula::Literal(_) | Formula::Trivial(_) => true,
            Formula::Or(list) => list.iter().all(|f| f.is_literal() || f.is_trivial()),
            _ => false,
        }
    }
}

struct TseitinEncoder<'m> {
    vars: &'m VariableMap,
    counter: usize,
    // Structurally equal subformulas share an auxiliary variable.
    cache: HashMap<Formula, Literal>,
    clauses: List<Formula>,
    definitions: List<(String, Formula)>,
}

impl TseitinEncoder<'_> {
    /// Adds `form` as a top-level conjunct.
    fn assert(&mut self, form: Formula) -> Result<()> {
        if form.is_clause() {
            self.clauses.push(form);
            return Ok(());
        }

        let lit = self.encode(form)?;
        self.clauses.push(lit);
        Ok(())
    }

    /// Returns a literal (or constant) equivalent to `form` under the clauses emitted so far.
    fn encode(&mut self, form: Formula) -> Result<Formula> {
        let kind = form.kind();
        let list = match form {
            Formula::Literal(_) | Formula::Trivial(_) => return Ok(form),
            Formula::Not(inner) if inner.is_literal() => return Ok((*inner).negated()),
            Formula::And(list) | Formula::Or(list) => list,
            form => return Err(Error::unsupported(&form)),
        };

        let operands = list
            .into_iter()
            .map(|form| self.encode(form))
            .collect::<Result<List<_>>>()?;
        let definition = Formula::connective(kind, operands);
        if let Some(lit) = self.cache.get(&definition) {
            return Ok(lit.clone().into());
        }

        let name = self.vars.fresh_name(AUX_PREFIX, &mut self.counter);
        let lit = Literal::new(name.clone(), true);
        let (pos, neg) = (Formula::from(lit.clone()), Formula::from(lit.clone().negated()));

        unwrap!(let (Formula::And(operands) | Formula::Or(operands)) = &definition);
        if kind == Kind::And {
            // v ⇔ (x1 ∧ … ∧ xn): ¬v ∨ xi for each i, and v ∨ ¬x1 ∨ … ∨ ¬xn.
            for x in operands {
                self.clauses.push(or(neg.clone(), x.clone()));
            }
            let negated = operands.iter().cloned().map(Formula::negated);
            self.clauses.push(or_(iter::once(pos.clone()).chain(negated)));
        } else {
            // v ⇔ (x1 ∨ … ∨ xn): v ∨ ¬xi for each i, and ¬v ∨ x1 ∨ … ∨ xn.
            for x in operands {
                self.clauses.push(or(pos.clone(), x.clone().negated()));
            }
            self.clauses.push(or_(iter::once(neg).chain(operands.iter().cloned())));
        }

        self.cache.insert(definition.clone(), lit);
        self.definitions.push((name, definition));
        Ok(pos)
    }
}
