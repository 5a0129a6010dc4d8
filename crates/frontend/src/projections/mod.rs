pub mod p900_customers;
