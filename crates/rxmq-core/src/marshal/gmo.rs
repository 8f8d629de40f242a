use rxmq_wire::GetMessageOptions;

use super::Marshal;
use crate::codec::{StemReader, StemWriter};
use crate::error::MarshalError;
use crate::store::VariableStore;

impl Marshal for GetMessageOptions {
    const TAGS: &'static [&'static str] = &[
        "VER", "OPT", "WAIT", "RQN", // v1
        "MOPT", "GS", "SS", "SEG", // v2
        "MT", "RL", // v3
        "MH", // v4
    ];

    fn overlay<S: VariableStore + ?Sized>(
        &mut self,
        reader: &StemReader<'_, S>,
    ) -> Result<(), MarshalError> {
        reader.load_int("VER", &mut self.version);
        reader.load_int("OPT", &mut self.options);
        reader.load_int("WAIT", &mut self.wait_interval);
        reader.load_fixed_string("RQN", &mut self.resolved_q_name);
        reader.load_int("MOPT", &mut self.match_options);
        reader.load_char("GS", &mut self.group_status);
        reader.load_char("SS", &mut self.segment_status);
        reader.load_char("SEG", &mut self.segmentation);
        reader.load_bytes("MT", &mut self.msg_token);
        reader.load_int("RL", &mut self.returned_length);
        reader.load_int64("MH", &mut self.msg_handle);
        Ok(())
    }

    fn emit<S: VariableStore + ?Sized>(&self, writer: &mut StemWriter<'_, S>) {
        writer.put_int("VER", self.version);
        writer.put_int("OPT", self.options);
        writer.put_int("WAIT", self.wait_interval);
        writer.put_fixed_string("RQN", &self.resolved_q_name);
        writer.put_int("MOPT", self.match_options);
        writer.put_char("GS", self.group_status);
        writer.put_char("SS", self.segment_status);
        writer.put_char("SEG", self.segmentation);
        writer.put_bytes("MT", &self.msg_token);
        writer.put_int("RL", self.returned_length);
        writer.put_int64("MH", self.msg_handle);
    }
}
