use base64::{engine::general_purpose::STANDARD, Engine as _};
use todo_client::events::TodoEvent;

const PROGRAM_DATA: &str = "Program data: ";

pub struct Helpers;

impl Helpers {
    /// Events emitted by the program, in log order.
    pub fn events_from_logs(logs: &[String]) -> Vec<TodoEvent> {
        logs.iter()
            .filter_map(|line| line.strip_prefix(PROGRAM_DATA))
            .map(|payload| {
                let data = STANDARD
                    .decode(payload)
                    .expect("Failed to decode program data");
                TodoEvent::decode(&data).expect("Failed to decode event")
            })
            .collect()
    }
}
