mod alert_object_list;
