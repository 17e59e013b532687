//! End-to-end parsing and rendering tests for iCalendar documents.
