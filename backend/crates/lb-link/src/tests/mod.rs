mod link_client;
