//! Diesel table definitions mirroring the embedded migrations.

diesel::table! {
    /// Quiz documents. `seq` records insertion order.
    quizzes (id) {
        id -> Uuid,
        seq -> Int8,
        title -> Text,
        description -> Text,
        question_count -> Int4,
        duration -> Int4,
        difficulty -> Text,
        category -> Text,
    }
}

diesel::table! {
    /// Announcement documents. `seq` records insertion order.
    announcements (id) {
        id -> Uuid,
        seq -> Int8,
        title -> Text,
        content -> Text,
        date -> Text,
        priority -> Text,
    }
}
