pub mod iesr;
