mod custom_voice_render_tests;
