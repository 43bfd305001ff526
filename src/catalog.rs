//! Static catalog of the operations this connector exposes and the input
//! fields each one collects. Pure data: the embedding host renders it into
//! whatever form UI it has, then hands the collected values back as typed
//! operation parameters.

/// How a field is collected in the host's form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    DateTime,
    Options,
    KeyValueList,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub hint: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Appointment lifecycle actions (book, reschedule, status changes).
    Appointment,
    /// Read-only scheduling lookups (availability, staff, workspaces, ...).
    Scheduling,
}

#[derive(Debug, Clone, Copy)]
pub struct OperationSpec {
    pub resource: ResourceKind,
    pub name: &'static str,
    pub label: &'static str,
    pub fields: &'static [FieldSpec],
}

const BOOKING_ID: FieldSpec = FieldSpec {
    name: "bookingId",
    label: "Booking ID",
    kind: FieldKind::Text,
    required: true,
    hint: Some("The ID shown on the appointment page, e.g. #appt-06594"),
};

const SERVICE_ID: FieldSpec = FieldSpec {
    name: "serviceId",
    label: "Service ID",
    kind: FieldKind::Text,
    required: true,
    hint: Some("The number in the URL field of the service page"),
};

const STAFF_ID: FieldSpec = FieldSpec {
    name: "staffId",
    label: "Staff ID",
    kind: FieldKind::Text,
    required: true,
    hint: None,
};

const TIME_ZONE: FieldSpec = FieldSpec {
    name: "timeZone",
    label: "Time Zone",
    kind: FieldKind::Text,
    required: false,
    hint: Some("IANA name like 'America/New_York'"),
};

const REGION: FieldSpec = FieldSpec {
    name: "region",
    label: "Zoho Region",
    kind: FieldKind::Options,
    required: false,
    hint: Some("Top-level domain of the national Zoho host"),
};

const RANGE_START: FieldSpec = FieldSpec {
    name: "startOfSearchRange",
    label: "Start Of Search Range",
    kind: FieldKind::DateTime,
    required: true,
    hint: None,
};

const RANGE_END: FieldSpec = FieldSpec {
    name: "endOfSearchRange",
    label: "End Of Search Range",
    kind: FieldKind::DateTime,
    required: true,
    hint: Some("Each day in the range is a separate upstream call; only the first 60 days are searched"),
};

const BOOK_APPOINTMENT_FIELDS: &[FieldSpec] = &[
    SERVICE_ID,
    STAFF_ID,
    FieldSpec {
        name: "startTime",
        label: "Start Time",
        kind: FieldKind::DateTime,
        required: true,
        hint: Some("Wall-clock time, e.g. 2024-04-30 22:30:00"),
    },
    FieldSpec {
        name: "customerName",
        label: "Customer Full Name",
        kind: FieldKind::Text,
        required: true,
        hint: None,
    },
    FieldSpec {
        name: "customerEmail",
        label: "Customer Email",
        kind: FieldKind::Text,
        required: true,
        hint: None,
    },
    FieldSpec {
        name: "customerPhone",
        label: "Customer Phone",
        kind: FieldKind::Text,
        required: false,
        hint: None,
    },
    FieldSpec {
        name: "customFieldPairs",
        label: "Custom Customer Fields",
        kind: FieldKind::KeyValueList,
        required: false,
        hint: Some("Exact names of custom contact fields and their values"),
    },
    FieldSpec {
        name: "customFieldsJson",
        label: "Custom Customer Fields (JSON)",
        kind: FieldKind::Json,
        required: false,
        hint: None,
    },
    FieldSpec {
        name: "resourceId",
        label: "Resource ID",
        kind: FieldKind::Text,
        required: false,
        hint: None,
    },
    FieldSpec {
        name: "groupId",
        label: "Group ID",
        kind: FieldKind::Text,
        required: false,
        hint: Some("Required for collective bookings"),
    },
    TIME_ZONE,
    REGION,
];

const RESCHEDULE_FIELDS: &[FieldSpec] = &[
    BOOKING_ID,
    FieldSpec {
        name: "startTime",
        label: "New Start Time",
        kind: FieldKind::DateTime,
        required: true,
        hint: None,
    },
    FieldSpec {
        name: "staffId",
        label: "Staff ID",
        kind: FieldKind::Text,
        required: false,
        hint: None,
    },
    TIME_ZONE,
    REGION,
];

const BOOKING_ID_ONLY: &[FieldSpec] = &[BOOKING_ID, REGION];

const AVAILABILITY_FIELDS: &[FieldSpec] = &[SERVICE_ID, STAFF_ID, RANGE_START, RANGE_END, REGION];

const STAFF_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "staffId",
        label: "Staff ID",
        kind: FieldKind::Text,
        required: false,
        hint: Some("Look up one staff member by ID"),
    },
    FieldSpec {
        name: "serviceId",
        label: "Service ID",
        kind: FieldKind::Text,
        required: false,
        hint: Some("List all staff assigned to a service"),
    },
    REGION,
];

const WORKSPACE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "workspaceId",
        label: "Workspace ID",
        kind: FieldKind::Text,
        required: false,
        hint: Some("Omit to list every workspace on the account"),
    },
    REGION,
];

const SERVICE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "workspaceId",
        label: "Workspace ID",
        kind: FieldKind::Text,
        required: true,
        hint: None,
    },
    FieldSpec {
        name: "staffId",
        label: "Staff ID",
        kind: FieldKind::Text,
        required: false,
        hint: None,
    },
    FieldSpec {
        name: "serviceId",
        label: "Service ID",
        kind: FieldKind::Text,
        required: false,
        hint: None,
    },
    REGION,
];

const RESOURCE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "resourceId",
        label: "Resource ID",
        kind: FieldKind::Text,
        required: false,
        hint: None,
    },
    FieldSpec {
        name: "serviceId",
        label: "Service ID",
        kind: FieldKind::Text,
        required: false,
        hint: None,
    },
    REGION,
];

pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        resource: ResourceKind::Appointment,
        name: "bookAppointment",
        label: "Book Appointment",
        fields: BOOK_APPOINTMENT_FIELDS,
    },
    OperationSpec {
        resource: ResourceKind::Appointment,
        name: "rescheduleAppointment",
        label: "Reschedule Appointment",
        fields: RESCHEDULE_FIELDS,
    },
    OperationSpec {
        resource: ResourceKind::Appointment,
        name: "getAppointment",
        label: "Get Appointment Details",
        fields: BOOKING_ID_ONLY,
    },
    OperationSpec {
        resource: ResourceKind::Appointment,
        name: "cancelAppointment",
        label: "Cancel Appointment",
        fields: BOOKING_ID_ONLY,
    },
    OperationSpec {
        resource: ResourceKind::Appointment,
        name: "markAsNoShow",
        label: "Mark As No Show",
        fields: BOOKING_ID_ONLY,
    },
    OperationSpec {
        resource: ResourceKind::Appointment,
        name: "markAsCompleted",
        label: "Mark As Completed",
        fields: BOOKING_ID_ONLY,
    },
    OperationSpec {
        resource: ResourceKind::Scheduling,
        name: "getAvailability",
        label: "Get Available Times",
        fields: AVAILABILITY_FIELDS,
    },
    OperationSpec {
        resource: ResourceKind::Scheduling,
        name: "getStaff",
        label: "Get Staff",
        fields: STAFF_FIELDS,
    },
    OperationSpec {
        resource: ResourceKind::Scheduling,
        name: "getWorkspaces",
        label: "Get Workspaces",
        fields: WORKSPACE_FIELDS,
    },
    OperationSpec {
        resource: ResourceKind::Scheduling,
        name: "getServices",
        label: "Get Services",
        fields: SERVICE_FIELDS,
    },
    OperationSpec {
        resource: ResourceKind::Scheduling,
        name: "getResources",
        label: "Get Resources",
        fields: RESOURCE_FIELDS,
    },
];

pub fn find(name: &str) -> Option<&'static OperationSpec> {
    OPERATIONS.iter().find(|op| op.name == name)
}

pub fn operations_for(resource: ResourceKind) -> impl Iterator<Item = &'static OperationSpec> {
    OPERATIONS.iter().filter(move |op| op.resource == resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn operation_names_are_unique() {
        let names: HashSet<_> = OPERATIONS.iter().map(|op| op.name).collect();
        assert_eq!(names.len(), OPERATIONS.len());
    }

    #[test]
    fn find_resolves_by_name() {
        let op = find("getAvailability").unwrap();
        assert_eq!(op.resource, ResourceKind::Scheduling);
        assert!(op.fields.iter().any(|f| f.name == "startOfSearchRange" && f.required));
        assert!(find("nope").is_none());
    }

    #[test]
    fn appointment_resource_covers_lifecycle() {
        let names: Vec<_> = operations_for(ResourceKind::Appointment)
            .map(|op| op.name)
            .collect();
        assert_eq!(
            names,
            [
                "bookAppointment",
                "rescheduleAppointment",
                "getAppointment",
                "cancelAppointment",
                "markAsNoShow",
                "markAsCompleted"
            ]
        );
    }
}
