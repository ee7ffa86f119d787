pub mod ivcf20;
