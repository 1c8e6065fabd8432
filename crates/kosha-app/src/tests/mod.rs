mod command_tests;
mod event_flow_tests;
