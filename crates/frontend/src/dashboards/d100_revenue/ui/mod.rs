mod dashboard;

pub use dashboard::RevenueDashboard;
