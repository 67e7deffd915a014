//! Built-in sample mailbox

use crate::domain::Mail;

/// The ten sample messages every fresh mailbox starts with.
pub fn sample_mail() -> Vec<Mail> {
    vec![
        Mail::new(
            "alice@example.com",
            "bob@example.com",
            "Project Update",
            "Hi Bob, just wanted to update you on the project progress. We're on track for the deadline.",
        ),
        Mail::new(
            "john.smith@company.com",
            "sarah.jones@company.com",
            "Meeting Reminder",
            "Don't forget about our team meeting tomorrow at 2 PM in Conference Room B.",
        ),
        Mail::new(
            "support@service.com",
            "user123@email.com",
            "Your Order Has Shipped",
            "Great news! Your order #12345 has been shipped and should arrive within 3-5 business days.",
        ),
        Mail::new(
            "newsletter@techblog.com",
            "subscriber@gmail.com",
            "Weekly Tech Digest",
            "Check out this week's top articles on AI, cloud computing, and software development best practices.",
        ),
        Mail::new(
            "hr@corporation.com",
            "employee@corporation.com",
            "Benefits Enrollment Deadline",
            "Reminder: The deadline to enroll in next year's benefits is December 15th. Please complete your selection soon.",
        ),
        Mail::new(
            "team-lead@startup.io",
            "developer@startup.io",
            "Code Review Request",
            "Hey, could you review PR #234 when you get a chance? It includes the new authentication feature.",
        ),
        Mail::new(
            "marketing@brand.com",
            "customers@lists.com",
            "Exclusive 20% Off Sale",
            "For a limited time, enjoy 20% off all products! Use code SAVE20 at checkout. Offer ends Sunday.",
        ),
        Mail::new(
            "security@bank.com",
            "account.holder@email.com",
            "Security Alert: Password Changed",
            "Your account password was recently changed. If this wasn't you, please contact us immediately.",
        ),
        Mail::new(
            "events@conference.org",
            "attendee@company.com",
            "Conference Schedule Available",
            "The full schedule for DevCon 2026 is now live! Browse sessions and plan your conference experience.",
        ),
        Mail::new(
            "noreply@automation.com",
            "admin@website.com",
            "Daily Backup Completed",
            "Automated backup completed successfully at 2:00 AM. All systems operational.",
        ),
    ]
}
