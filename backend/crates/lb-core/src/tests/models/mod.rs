mod connect_method;
mod linked_account;
