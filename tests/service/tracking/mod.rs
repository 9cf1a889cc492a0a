mod get_tracking;
