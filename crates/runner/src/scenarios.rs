use dc_core::{ContingentEdge, ControllableEdge, Network};

/// One of the built-in demo networks, named after the end-to-end scenarios
/// they were drawn from.
pub struct Scenario {
    pub name: &'static str,
    pub network: Network,
}

fn controllable(from: usize, to: usize, lower: f64, upper: f64) -> ControllableEdge {
    ControllableEdge {
        from,
        to,
        lower,
        upper,
    }
}

fn contingent(from: usize, to: usize, lower: f64, upper: f64) -> ContingentEdge {
    ContingentEdge {
        from,
        to,
        lower,
        upper,
    }
}

/// Built-in demo networks, in the order they appear in the core's test
/// suite: trivial DC, trivial inconsistent STN, trivial contingent, Morris's
/// canonical DC example, the classical squeeze, and the normalization
/// trigger.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "trivial-dc",
            network: Network::new(2, vec![controllable(1, 2, 0.0, 10.0)], vec![]).unwrap(),
        },
        Scenario {
            name: "trivial-inconsistent",
            network: Network::new(
                3,
                vec![
                    controllable(1, 2, 0.0, 5.0),
                    controllable(2, 1, 0.0, 5.0),
                    controllable(1, 3, 6.0, 6.0),
                    controllable(3, 2, 0.0, 0.0),
                ],
                vec![],
            )
            .unwrap(),
        },
        Scenario {
            name: "single-contingent-trivial",
            network: Network::new(2, vec![], vec![contingent(1, 2, 0.0, 3.0)]).unwrap(),
        },
        Scenario {
            name: "morris-canonical",
            network: Network::new(
                3,
                vec![controllable(1, 3, 0.0, 10.0), controllable(2, 3, 0.0, 10.0)],
                vec![contingent(1, 2, 1.0, 3.0)],
            )
            .unwrap(),
        },
        Scenario {
            name: "classical-squeeze",
            network: Network::new(
                3,
                vec![controllable(1, 3, 5.0, 5.0), controllable(3, 2, 0.0, 0.0)],
                vec![contingent(1, 2, 1.0, 10.0)],
            )
            .unwrap(),
        },
        Scenario {
            name: "normalization-trigger",
            network: Network::new(2, vec![], vec![contingent(1, 2, 2.0, 5.0)]).unwrap(),
        },
    ]
}
