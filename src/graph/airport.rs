use std::cell::{Ref, RefCell};
use std::fmt::Debug;
use std::rc::Rc;

/// An airport in a flight network.
///
/// Two `Airport` handles denote the same node iff they point at the same
/// allocation ([`Rc::ptr_eq`]); the code is a label, not an identity. Routes
/// are directed: an outbound flight from `a` to `b` says nothing about flights
/// from `b`.
pub struct Airport {
    pub code: String,
    outbound: RefCell<Vec<Rc<Airport>>>,
}

impl Airport {
    /// Creates an airport with the given code and no outbound flights.
    pub fn new(code: impl Into<String>) -> Rc<Self> {
        Rc::new(Airport {
            code: code.into(),
            outbound: RefCell::new(Vec::new()),
        })
    }

    /// Adds a directed flight from this airport to `destination`.
    pub fn add_outbound_flight(&self, destination: &Rc<Airport>) {
        self.outbound.borrow_mut().push(Rc::clone(destination));
    }

    /// Read-only view of the outbound-flight destinations, in insertion order.
    pub fn outbound_flights(&self) -> Ref<'_, Vec<Rc<Airport>>> {
        self.outbound.borrow()
    }
}

impl Debug for Airport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Airport")
            .field("code", &self.code)
            .field(
                "outbound",
                &self
                    .outbound
                    .borrow()
                    .iter()
                    .map(|a| &a.code)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_airport_has_no_flights() {
        let lax = Airport::new("LAX");
        assert!(lax.outbound_flights().is_empty());
    }

    #[test]
    fn flights_are_directed_and_ordered() {
        let sfo = Airport::new("SFO");
        let jfk = Airport::new("JFK");
        let ord = Airport::new("ORD");
        sfo.add_outbound_flight(&jfk);
        sfo.add_outbound_flight(&ord);

        let out = sfo.outbound_flights();
        assert_eq!(out.len(), 2);
        assert!(Rc::ptr_eq(&out[0], &jfk));
        assert!(Rc::ptr_eq(&out[1], &ord));
        // no return edge was created
        assert!(jfk.outbound_flights().is_empty());
    }
}
