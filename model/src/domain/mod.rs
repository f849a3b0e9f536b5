pub mod sla;
