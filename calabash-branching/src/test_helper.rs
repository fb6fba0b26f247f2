//! An interval-store fixture for exercising the branching layer in tests. Variables are named
//! `x0..xN` and hold integer bounds; the store can be narrowed and marked inconsistent between
//! refinement rounds the way a propagation engine would.

use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;

use crate::basic_types::AVar;
use crate::domains::Domain;
use crate::domains::Environment;
use crate::domains::Universe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Interval {
    pub(crate) lb: i64,
    pub(crate) ub: i64,
}

impl Universe for Interval {
    type Bound = i64;

    fn lb(&self) -> i64 {
        self.lb
    }

    fn ub(&self) -> i64 {
        self.ub
    }
}

#[derive(Debug)]
pub(crate) struct IntervalBox {
    env: RefCell<Environment>,
    bounds: RefCell<Vec<Interval>>,
    top: Cell<bool>,
}

impl IntervalBox {
    /// Creates a store with one variable per `(lb, ub)` pair, named `x0`, `x1`, ...
    pub(crate) fn create_for_testing(domains: Vec<(i64, i64)>) -> Rc<IntervalBox> {
        let mut env = Environment::new();
        let mut bounds = Vec::new();
        for (i, (lb, ub)) in domains.into_iter().enumerate() {
            let _ = env.declare(format!("x{i}")).expect("names are fresh");
            bounds.push(Interval { lb, ub });
        }
        Rc::new(IntervalBox {
            env: RefCell::new(env),
            bounds: RefCell::new(bounds),
            top: Cell::new(false),
        })
    }

    /// Declares one more variable, as interpreting a new formula against the store would.
    pub(crate) fn declare(&self, lb: i64, ub: i64) -> AVar {
        let name = format!("x{}", self.env.borrow().len());
        let var = self
            .env
            .borrow_mut()
            .declare(name)
            .expect("names are fresh");
        self.bounds.borrow_mut().push(Interval { lb, ub });
        var
    }

    pub(crate) fn set_bounds(&self, var: AVar, lb: i64, ub: i64) {
        self.bounds.borrow_mut()[var.index()] = Interval { lb, ub };
    }

    /// Fixes `var` to a single value.
    pub(crate) fn assign(&self, var: AVar, value: i64) {
        self.set_bounds(var, value, value);
    }

    pub(crate) fn mark_top(&self) {
        self.top.set(true);
    }
}

impl Domain for IntervalBox {
    type Universe = Interval;

    fn num_variables(&self) -> usize {
        self.env.borrow().len()
    }

    fn to_avar(&self, index: usize) -> Option<AVar> {
        self.env.borrow().to_avar(index)
    }

    fn project(&self, var: AVar) -> Interval {
        self.bounds.borrow()[var.index()]
    }

    fn is_top(&self) -> bool {
        self.top.get() || self.bounds.borrow().iter().any(|interval| interval.lb > interval.ub)
    }

    fn snapshot(&self) -> Self {
        IntervalBox {
            env: RefCell::new(self.env.borrow().clone()),
            bounds: RefCell::new(self.bounds.borrow().clone()),
            top: Cell::new(self.top.get()),
        }
    }
}
