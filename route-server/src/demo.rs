//! Fixed demonstration queries.
//!
//! Runs the ten standard questions against a network and renders one
//! `Output #n: value` line per answer.

use std::fmt;

use tracing::warn;

use crate::domain::{GraphError, InvalidTerminal, Terminal};
use crate::planner::{RouteAnswer, RoutePlanner};

/// One demonstration question.
#[derive(Debug, Clone, Copy)]
enum Question {
    Distance(&'static [&'static str]),
    AtMostStops(&'static str, &'static str, u64),
    ExactStops(&'static str, &'static str, u64),
    Shortest(&'static str, &'static str),
    DistanceLessThan(&'static str, &'static str, u64),
}

const QUESTIONS: [Question; 10] = [
    Question::Distance(&["A", "B", "C"]),
    Question::Distance(&["A", "D"]),
    Question::Distance(&["A", "D", "C"]),
    Question::Distance(&["A", "E", "B", "C", "D"]),
    Question::Distance(&["A", "E", "D"]),
    Question::AtMostStops("C", "C", 3),
    Question::ExactStops("A", "C", 4),
    Question::Shortest("A", "C"),
    Question::Shortest("B", "B"),
    Question::DistanceLessThan("C", "C", 30),
];

/// Answer to one demonstration question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Distance(RouteAnswer),
    Count(usize),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Distance(answer) => write!(f, "{answer}"),
            Output::Count(n) => write!(f, "{n}"),
        }
    }
}

/// Why a demonstration question could not be answered.
#[derive(Debug, thiserror::Error)]
enum QuestionError {
    #[error(transparent)]
    Terminal(#[from] InvalidTerminal),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

fn terminal(name: &str) -> Result<Terminal, InvalidTerminal> {
    Terminal::parse(name)
}

impl Question {
    fn ask(self, planner: &RoutePlanner) -> Result<Output, QuestionError> {
        Ok(match self {
            Question::Distance(names) => {
                let stops = names
                    .iter()
                    .map(|n| terminal(n))
                    .collect::<Result<Vec<_>, _>>()?;
                Output::Distance(planner.route_distance(&stops))
            }
            Question::AtMostStops(a, b, n) => Output::Count(
                planner.count_routes_with_at_most_stops(&terminal(a)?, &terminal(b)?, n)?,
            ),
            Question::ExactStops(a, b, n) => Output::Count(
                planner.count_routes_with_exact_stops(&terminal(a)?, &terminal(b)?, n)?,
            ),
            Question::Shortest(a, b) => {
                Output::Distance(planner.shortest_route_length(&terminal(a)?, &terminal(b)?)?)
            }
            Question::DistanceLessThan(a, b, n) => Output::Count(
                planner.count_routes_with_distance_less_than(&terminal(a)?, &terminal(b)?, n)?,
            ),
        })
    }
}

/// Answer every demonstration question, in order.
///
/// A question about a terminal the network does not contain is answered with
/// `NO SUCH ROUTE` rather than stopping the run.
pub fn answers(planner: &RoutePlanner) -> Vec<Output> {
    QUESTIONS
        .iter()
        .map(|q| {
            q.ask(planner).unwrap_or_else(|e| {
                warn!(question = ?q, error = %e, "Demonstration question failed");
                Output::Distance(RouteAnswer::NoSuchRoute)
            })
        })
        .collect()
}

/// Render the demonstration answers as `Output #n: value` lines.
pub fn run(planner: &RoutePlanner) -> String {
    answers(planner)
        .iter()
        .enumerate()
        .map(|(i, output)| format!("Output #{}: {}\n", i + 1, output))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOWN: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

    #[test]
    fn town_output() {
        let planner = RoutePlanner::from_edge_list(TOWN).unwrap();
        let expected = "\
Output #1: 9
Output #2: 5
Output #3: 13
Output #4: 22
Output #5: NO SUCH ROUTE
Output #6: 2
Output #7: 3
Output #8: 9
Output #9: 9
Output #10: 7
";
        assert_eq!(run(&planner), expected);
    }

    #[test]
    fn missing_terminals_answer_no_route() {
        let planner = RoutePlanner::from_edge_list("AB1, BA1").unwrap();
        let outputs = answers(&planner);

        assert_eq!(outputs.len(), 10);
        assert_eq!(outputs[0], Output::Distance(RouteAnswer::NoSuchRoute));
        // C is unknown
        assert_eq!(outputs[5], Output::Distance(RouteAnswer::NoSuchRoute));
        assert_eq!(outputs[8], Output::Distance(RouteAnswer::Distance(2)));
    }
}
