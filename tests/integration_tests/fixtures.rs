//! Test fixtures for integration tests
//!
//! Sample schedule documents in the wire format exchanged with the store

/// A valid schedule: weekdays with a split Wednesday, lunch break, slot settings
pub const VALID_SCHEDULE_JSON: &str = r#"
{
    "workSchedule": [
        { "dayOfWeek": 1, "intervals": [{ "from": "09:00", "to": "18:00" }] },
        { "dayOfWeek": 2, "intervals": [{ "from": "09:00", "to": "18:00" }] },
        { "dayOfWeek": 3, "intervals": [
            { "from": "09:00", "to": "13:00" },
            { "from": "13:00", "to": "18:00" }
        ] },
        { "dayOfWeek": 4, "intervals": [{ "from": "09:00", "to": "18:00" }] },
        { "dayOfWeek": 5, "intervals": [{ "from": "10:00", "to": "16:00" }] }
    ],
    "breaks": [{ "from": "12:00", "to": "13:00", "reason": "Lunch" }],
    "defaultBufferMinutes": 15,
    "slotStepMinutes": 10
}
"#;

/// Nothing configured yet
pub const EMPTY_SCHEDULE_JSON: &str = r#"
{
    "workSchedule": null,
    "breaks": null,
    "defaultBufferMinutes": null,
    "slotStepMinutes": null
}
"#;

/// Thursday has overlapping intervals
pub const OVERLAPPING_DAY_JSON: &str = r#"
{
    "workSchedule": [
        { "dayOfWeek": 1, "intervals": [{ "from": "09:00", "to": "18:00" }] },
        { "dayOfWeek": 4, "intervals": [
            { "from": "09:00", "to": "13:30" },
            { "from": "13:00", "to": "18:00" }
        ] }
    ],
    "breaks": null,
    "defaultBufferMinutes": null,
    "slotStepMinutes": null
}
"#;

/// Break that runs past the end of every working interval
pub const BREAK_OUTSIDE_JSON: &str = r#"
{
    "workSchedule": [
        { "dayOfWeek": 2, "intervals": [{ "from": "09:00", "to": "18:00" }] }
    ],
    "breaks": [{ "from": "12:00", "to": "19:00" }],
    "defaultBufferMinutes": 20,
    "slotStepMinutes": 5
}
"#;

/// Malformed time on Saturday
pub const BAD_TIME_JSON: &str = r#"
{
    "workSchedule": [
        { "dayOfWeek": 6, "intervals": [{ "from": "9:00", "to": "12:00" }] }
    ]
}
"#;

/// Day of week outside 0-6
pub const BAD_DAY_JSON: &str = r#"
{
    "workSchedule": [
        { "dayOfWeek": 7, "intervals": [{ "from": "09:00", "to": "12:00" }] }
    ]
}
"#;
