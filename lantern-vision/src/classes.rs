use crate::detector::Detection;

/// Navigation relevance of a detector class. Drives overlay styling and
/// the criticality escalation below; the path planner itself is
/// class-agnostic and works from geometry alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

/// Static display/priority entry for one detector label.
#[derive(Debug, Clone, Copy)]
pub struct NavClass {
    pub label: &'static str,
    pub priority: Priority,
    pub display_name: &'static str,
    pub color: &'static str,
    pub show_label: bool,
}

/// Label lookup table, kept as explicit data. Anything not listed falls
/// back to `DEFAULT_CLASS` with the raw label as its display name.
pub const NAV_CLASSES: &[NavClass] = &[
    // Immediate dangers
    NavClass { label: "car", priority: Priority::Critical, display_name: "Vehicle", color: "#dc2626", show_label: true },
    NavClass { label: "truck", priority: Priority::Critical, display_name: "Vehicle", color: "#dc2626", show_label: true },
    NavClass { label: "bus", priority: Priority::Critical, display_name: "Vehicle", color: "#dc2626", show_label: true },
    NavClass { label: "motorcycle", priority: Priority::Critical, display_name: "Vehicle", color: "#dc2626", show_label: true },
    NavClass { label: "bicycle", priority: Priority::High, display_name: "Bike", color: "#ea580c", show_label: true },
    // People
    NavClass { label: "person", priority: Priority::High, display_name: "Person", color: "#f59e0b", show_label: true },
    // Furniture-sized obstacles
    NavClass { label: "chair", priority: Priority::Medium, display_name: "Chair", color: "#3b82f6", show_label: false },
    NavClass { label: "couch", priority: Priority::Medium, display_name: "Couch", color: "#3b82f6", show_label: false },
    NavClass { label: "dining table", priority: Priority::Medium, display_name: "Table", color: "#3b82f6", show_label: false },
    NavClass { label: "bench", priority: Priority::Medium, display_name: "Bench", color: "#3b82f6", show_label: false },
    // Walls and barriers, including the ones the analyzer synthesizes
    NavClass { label: "wall", priority: Priority::High, display_name: "Wall", color: "#dc2626", show_label: true },
    NavClass { label: "barrier", priority: Priority::High, display_name: "Barrier", color: "#dc2626", show_label: true },
    NavClass { label: "potential wall", priority: Priority::Medium, display_name: "Wall", color: "#f59e0b", show_label: false },
    // Small movable obstacles
    NavClass { label: "potted plant", priority: Priority::Low, display_name: "Plant", color: "#10b981", show_label: false },
    NavClass { label: "backpack", priority: Priority::Low, display_name: "Bag", color: "#10b981", show_label: false },
    NavClass { label: "handbag", priority: Priority::Low, display_name: "Bag", color: "#10b981", show_label: false },
    NavClass { label: "suitcase", priority: Priority::Low, display_name: "Luggage", color: "#10b981", show_label: false },
    // Passages
    NavClass { label: "door", priority: Priority::Info, display_name: "Door", color: "#8b5cf6", show_label: true },
    NavClass { label: "window", priority: Priority::Info, display_name: "Window", color: "#8b5cf6", show_label: false },
    // Traffic elements
    NavClass { label: "traffic light", priority: Priority::High, display_name: "Traffic", color: "#ef4444", show_label: true },
    NavClass { label: "stop sign", priority: Priority::High, display_name: "Stop Sign", color: "#ef4444", show_label: true },
];

/// Fallback for unknown labels: generic low-priority obstacle.
pub const DEFAULT_CLASS: NavClass = NavClass {
    label: "",
    priority: Priority::Low,
    display_name: "",
    color: "#22c55e",
    show_label: false,
};

pub fn lookup(label: &str) -> Option<&'static NavClass> {
    NAV_CLASSES.iter().find(|class| class.label == label)
}

/// Per-detection classification after size and proximity escalation.
#[derive(Debug, Clone)]
pub struct ObjectClassification {
    pub priority: Priority,
    pub display_name: String,
    pub color: &'static str,
    pub show_label: bool,
    pub is_critical: bool,
    pub relative_size: f32,
}

/// Resolves a detection against the table and escalates by apparent size:
/// a high-priority object filling 30% of the frame width, or a
/// medium-priority one filling 40%, is treated as critical. Overlay color
/// shifts to red/orange as the object closes in, regardless of class.
pub fn classify(detection: &Detection, frame_width: u32) -> ObjectClassification {
    let label = detection.label.to_lowercase();
    let class = lookup(&label);
    let entry = class.unwrap_or(&DEFAULT_CLASS);

    let relative_size = detection.bbox.relative_width(frame_width);
    let is_critical = entry.priority == Priority::Critical
        || (relative_size > 0.3 && entry.priority == Priority::High)
        || (relative_size > 0.4 && entry.priority == Priority::Medium);

    let color = if relative_size > 0.4 {
        "#dc2626" // very close, always red
    } else if relative_size > 0.2 {
        "#f59e0b" // close, orange
    } else {
        entry.color
    };

    let display_name = if class.is_some() {
        entry.display_name.to_string()
    } else {
        detection.label.clone()
    };

    ObjectClassification {
        priority: entry.priority,
        display_name,
        color,
        show_label: entry.show_label,
        is_critical,
        relative_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::BoundingBox;

    fn detection(label: &str, width: f32) -> Detection {
        Detection::new(
            label,
            0.9,
            BoundingBox {
                x: 0.0,
                y: 0.0,
                width,
                height: 100.0,
            },
        )
    }

    #[test]
    fn known_label_uses_table_entry() {
        let classified = classify(&detection("car", 50.0), 640);
        assert_eq!(classified.display_name, "Vehicle");
        assert!(classified.is_critical);
        assert!(classified.show_label);
    }

    #[test]
    fn unknown_label_falls_back_to_generic_entry() {
        let classified = classify(&detection("zebra", 50.0), 640);
        assert_eq!(classified.display_name, "zebra");
        assert_eq!(classified.priority, Priority::Low);
        assert!(!classified.is_critical);
    }

    #[test]
    fn high_priority_escalates_to_critical_when_large() {
        let small = classify(&detection("person", 100.0), 640);
        assert!(!small.is_critical);
        let large = classify(&detection("person", 250.0), 640);
        assert!(large.is_critical);
    }

    #[test]
    fn color_shifts_red_as_object_closes_in() {
        let far = classify(&detection("chair", 60.0), 640);
        assert_eq!(far.color, "#3b82f6");
        let near = classify(&detection("chair", 300.0), 640);
        assert_eq!(near.color, "#dc2626");
    }
}
