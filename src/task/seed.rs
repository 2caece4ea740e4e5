use super::{Priority, Task, TaskStatus};

/// Tasks present when a demo session starts
pub fn initial_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            name: "Medication Delivery".to_string(),
            robot: "Robot A".to_string(),
            status: TaskStatus::InTransit,
            progress: 70,
            room: "Room 101".to_string(),
            pick_up: "Pharmacy".to_string(),
            drop_off: "Room 101".to_string(),
            priority: Priority::High,
            signature_needed: true,
            signature: None,
            delayed: false,
            compartment: "1".to_string(),
            patient_id: "P101".to_string(),
            requested_by: "Dr. Smith".to_string(),
            special_instructions: String::new(),
            refusal_count: 0,
        },
        Task {
            id: 2,
            name: "Lab Sample Transport".to_string(),
            robot: "Robot B".to_string(),
            status: TaskStatus::InTransit,
            progress: 30,
            room: "Laboratory".to_string(),
            pick_up: "ICU Ward".to_string(),
            drop_off: "Laboratory".to_string(),
            priority: Priority::Medium,
            signature_needed: false,
            signature: None,
            delayed: false,
            compartment: "2".to_string(),
            patient_id: "P207".to_string(),
            requested_by: "Nurse Garcia".to_string(),
            special_instructions: "Keep upright".to_string(),
            refusal_count: 0,
        },
        Task {
            id: 3,
            name: "Medical Supplies Restock".to_string(),
            robot: "Robot D".to_string(),
            status: TaskStatus::Pending,
            progress: 0,
            room: "Nurse Station".to_string(),
            pick_up: "Storage Unit A".to_string(),
            drop_off: "Nurse Station".to_string(),
            priority: Priority::Low,
            signature_needed: false,
            signature: None,
            delayed: false,
            compartment: "N/A".to_string(),
            patient_id: String::new(),
            requested_by: "Head Nurse".to_string(),
            special_instructions: String::new(),
            refusal_count: 0,
        },
    ]
}
