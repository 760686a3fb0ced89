//! Chain of Responsibility Pattern
//!
//! A leave request walks up the chain until someone is allowed to approve it.

use std::io::{self, Write};

use tracing::trace;

pub trait LeaveHandler {
    fn set_next_handler(&mut self, next: Box<dyn LeaveHandler>);

    fn next_handler(&self) -> Option<&dyn LeaveHandler>;

    /// Approval line, or `None` when nobody in the chain can approve.
    fn handle_request(&self, days: u32) -> Option<String>;

    fn escalate(&self, days: u32) -> Option<String> {
        trace!(days, "escalating leave request");
        self.next_handler()?.handle_request(days)
    }
}

#[derive(Default)]
pub struct TeamLead {
    next: Option<Box<dyn LeaveHandler>>,
}

impl TeamLead {
    pub const LIMIT: u32 = 3;
}

impl LeaveHandler for TeamLead {
    fn set_next_handler(&mut self, next: Box<dyn LeaveHandler>) {
        self.next = Some(next);
    }

    fn next_handler(&self) -> Option<&dyn LeaveHandler> {
        self.next.as_deref()
    }

    fn handle_request(&self, days: u32) -> Option<String> {
        if days < Self::LIMIT {
            Some(format!("Team Lead approved {} days Leave", days))
        } else {
            self.escalate(days)
        }
    }
}

#[derive(Default)]
pub struct Manager {
    next: Option<Box<dyn LeaveHandler>>,
}

impl Manager {
    pub const LIMIT: u32 = 8;
}

impl LeaveHandler for Manager {
    fn set_next_handler(&mut self, next: Box<dyn LeaveHandler>) {
        self.next = Some(next);
    }

    fn next_handler(&self) -> Option<&dyn LeaveHandler> {
        self.next.as_deref()
    }

    fn handle_request(&self, days: u32) -> Option<String> {
        if days < Self::LIMIT {
            Some(format!("Manager approved {} days Leave", days))
        } else {
            self.escalate(days)
        }
    }
}

// End of the chain: approves everything.
#[derive(Default)]
pub struct Ceo {
    next: Option<Box<dyn LeaveHandler>>,
}

impl LeaveHandler for Ceo {
    fn set_next_handler(&mut self, next: Box<dyn LeaveHandler>) {
        self.next = Some(next);
    }

    fn next_handler(&self) -> Option<&dyn LeaveHandler> {
        self.next.as_deref()
    }

    fn handle_request(&self, days: u32) -> Option<String> {
        Some(format!("CEO approved {} days Leave", days))
    }
}

/// Team lead -> manager -> CEO.
pub fn approval_chain() -> Box<dyn LeaveHandler> {
    let mut manager = Manager::default();
    manager.set_next_handler(Box::new(Ceo::default()));

    let mut team_lead = TeamLead::default();
    team_lead.set_next_handler(Box::new(manager));
    Box::new(team_lead)
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let chain = approval_chain();

    for days in [2, 7, 30] {
        if let Some(approval) = chain.handle_request(days) {
            writeln!(out, "{}", approval)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries() {
        let chain = approval_chain();
        assert_eq!(chain.handle_request(0).unwrap(), "Team Lead approved 0 days Leave");
        assert_eq!(chain.handle_request(3).unwrap(), "Manager approved 3 days Leave");
        assert_eq!(chain.handle_request(8).unwrap(), "CEO approved 8 days Leave");
    }

    #[test]
    fn test_broken_chain_yields_none() {
        let team_lead = TeamLead::default();
        assert!(team_lead.handle_request(1).is_some());
        assert!(team_lead.handle_request(5).is_none());
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Team Lead approved 2 days Leave\n\
             Manager approved 7 days Leave\n\
             CEO approved 30 days Leave\n"
        );
    }

    proptest! {
        #[test]
        fn test_lowest_eligible_handler_approves(days in 0u32..10_000) {
            let approval = approval_chain().handle_request(days).unwrap();
            let expected = if days < TeamLead::LIMIT {
                "Team Lead"
            } else if days < Manager::LIMIT {
                "Manager"
            } else {
                "CEO"
            };
            prop_assert!(approval.starts_with(expected));
            let needle = format!(" {} days", days);
            prop_assert!(approval.contains(&needle));
        }
    }
}
