use crate::features::contact::{FieldStatus, NotificationKind};

pub fn field_group_class(status: &FieldStatus) -> &'static str {
    match status {
        FieldStatus::Error(_) => "form-group error",
        FieldStatus::Success => "form-group success",
        FieldStatus::Neutral => "form-group",
    }
}

pub fn field_input_style(status: &FieldStatus) -> &'static str {
    match status {
        FieldStatus::Error(_) => "border-color: #dc2626; background-color: rgba(220, 38, 38, 0.05);",
        FieldStatus::Success => "border-color: #10b981; background-color: rgba(16, 185, 129, 0.05);",
        FieldStatus::Neutral => "",
    }
}

pub fn notification_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "form-notification success",
        NotificationKind::Error => "form-notification error",
    }
}

pub fn notification_style(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "background: #10b981;",
        NotificationKind::Error => "background: #ef4444;",
    }
}

pub fn notification_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✓",
        NotificationKind::Error => "⚠",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_group_class() {
        assert_eq!(field_group_class(&FieldStatus::Neutral), "form-group");
        assert_eq!(field_group_class(&FieldStatus::Success), "form-group success");
        assert_eq!(
            field_group_class(&FieldStatus::Error("Email is required.".to_string())),
            "form-group error"
        );
        assert_eq!(field_input_style(&FieldStatus::Neutral), "");
    }

    #[test]
    fn test_notification_mapping() {
        assert_eq!(
            notification_class(NotificationKind::Success),
            "form-notification success"
        );
        assert_eq!(notification_icon(NotificationKind::Error), "⚠");
        assert!(notification_style(NotificationKind::Error).contains("#ef4444"));
    }
}
