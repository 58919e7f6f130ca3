binary_layout::binary_layout!(rdm_request_layout, BigEndian, {
    start_code: u8,
    sub_start_code: u8,
    message_length: u8,
    destination_uid: [u8; 6],
    source_uid: [u8; 6],
    transaction_number: u8,
    port_id_response_type: u8,
    message_count: u8,
    sub_device: u16,
    command_class: u8,
    parameter_id: u16,
    parameter_data_length: u8,
    parameter_data_and_checksum: [u8],
});

binary_layout::binary_layout!(rdm_status_message_layout, BigEndian, {
    sub_device_id: u16,
    status_type: u8,
    status_message_id: u16,
    data_value_1: u16,
    data_value_2: u16,
});

binary_layout::binary_layout!(rdm_device_info_layout, BigEndian, {
    protocol_version: u16,
    device_model_id: u16,
    product_category: u16,
    software_version_id: u32,
    dmx_footprint: u16,
    current_personality: u8,
    personality_count: u8,
    dmx_start_address: u16,
    sub_device_count: u16,
    sensor_count: u8,
});

binary_layout::binary_layout!(personality_description_layout, BigEndian, {
    personality: u8,
    slots_required: u16,
    description: [u8; 32],
});

binary_layout::binary_layout!(dimmer_info_layout, BigEndian, {
    min_level_lower: u16,
    min_level_upper: u16,
    max_level_lower: u16,
    max_level_upper: u16,
    curve_count: u8,
    level_resolution: u8,
    level_support: u8,
});

binary_layout::binary_layout!(minimum_level_layout, BigEndian, {
    min_level_increasing: u16,
    min_level_decreasing: u16,
    on_below_min: u8,
});

binary_layout::binary_layout!(preset_playback_layout, BigEndian, {
    mode: u16,
    level: u8,
});

binary_layout::binary_layout!(preset_status_layout, BigEndian, {
    scene: u16,
    fade_up_time: u16,
    fade_down_time: u16,
    wait_time: u16,
    programmed: u8,
});

binary_layout::binary_layout!(fail_startup_mode_layout, BigEndian, {
    scene: u16,
    delay: u16,
    hold_time: u16,
    level: u8,
});

binary_layout::binary_layout!(real_time_clock_layout, BigEndian, {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
});

binary_layout::binary_layout!(parameter_description_layout, BigEndian, {
    pid: u16,
    pdl_size: u8,
    data_type: u8,
    command_class: u8,
    param_type: u8,
    unit: u8,
    prefix: u8,
    min_value: u32,
    default_value: u32,
    max_value: u32,
    description: [u8; 32],
});

binary_layout::binary_layout!(sensor_value_layout, BigEndian, {
    sensor: u8,
    value: i16,
    lowest: i16,
    highest: i16,
    recorded: i16,
});

binary_layout::binary_layout!(sensor_definition_layout, BigEndian, {
    sensor: u8,
    kind: u8,
    unit: u8,
    prefix: u8,
    range_min: i16,
    range_max: i16,
    normal_min: i16,
    normal_max: i16,
    recorded_value_support: u8,
    description: [u8],
});

binary_layout::binary_layout!(capture_preset_layout, BigEndian, {
    scene: u16,
    fade_up_time: u16,
    fade_down_time: u16,
    wait_time: u16,
});

binary_layout::binary_layout!(preset_info_layout, BigEndian, {
    level_field_supported: u8,
    preset_sequence_supported: u8,
    split_times_supported: u8,
    dmx_fail_infinite_delay_supported: u8,
    dmx_fail_infinite_hold_supported: u8,
    startup_infinite_hold_supported: u8,
    max_scene_number: u16,
    min_preset_fade_time: u16,
    max_preset_fade_time: u16,
    min_preset_wait_time: u16,
    max_preset_wait_time: u16,
    min_fail_delay_time: u16,
    max_fail_delay_time: u16,
    min_fail_hold_time: u16,
    max_fail_hold_time: u16,
    min_startup_delay_time: u16,
    max_startup_delay_time: u16,
    min_startup_hold_time: u16,
    max_startup_hold_time: u16,
});
