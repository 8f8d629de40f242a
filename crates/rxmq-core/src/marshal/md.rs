use rxmq_wire::MessageDescriptor;

use super::Marshal;
use crate::codec::{StemReader, StemWriter};
use crate::error::MarshalError;
use crate::store::VariableStore;

/// Tags written by [`emit_md_v1`].
#[cfg(test)]
pub(crate) const MD_V1_TAGS: &[&str] = &[
    "VER", "REP", "MSG", "EXP", "FBK", "ENC", "CCSI", "FORM", "PRI", "PER", "MSGID", "CID", "BC",
    "RTOQ", "RTOQM", "UID", "AT", "AID", "PAT", "PAN", "PD", "PT", "AOD",
];

/// Write the version 1 fields of `md`.
pub(crate) fn emit_md_v1<S: VariableStore + ?Sized>(
    md: &MessageDescriptor,
    writer: &mut StemWriter<'_, S>,
) {
    writer.put_int("VER", md.version);
    writer.put_int("REP", md.report);
    writer.put_int("MSG", md.msg_type);
    writer.put_int("EXP", md.expiry);
    writer.put_int("FBK", md.feedback);
    writer.put_int("ENC", md.encoding);
    writer.put_int("CCSI", md.coded_char_set_id);
    writer.put_fixed_string("FORM", &md.format);
    writer.put_int("PRI", md.priority);
    writer.put_int("PER", md.persistence);
    writer.put_bytes("MSGID", &md.msg_id);
    writer.put_bytes("CID", &md.correl_id);
    writer.put_int("BC", md.backout_count);
    writer.put_fixed_string("RTOQ", &md.reply_to_q);
    writer.put_fixed_string("RTOQM", &md.reply_to_qmgr);
    writer.put_fixed_string("UID", &md.user_identifier);
    writer.put_bytes("AT", &md.accounting_token);
    writer.put_fixed_string("AID", &md.appl_identity_data);
    writer.put_int("PAT", md.put_appl_type);
    writer.put_fixed_string("PAN", &md.put_appl_name);
    writer.put_fixed_string("PD", &md.put_date);
    writer.put_fixed_string("PT", &md.put_time);
    writer.put_fixed_string("AOD", &md.appl_origin_data);
}

impl Marshal for MessageDescriptor {
    const TAGS: &'static [&'static str] = &[
        "VER", "REP", "MSG", "EXP", "FBK", "ENC", "CCSI", "FORM", "PRI", "PER", "MSGID", "CID",
        "BC", "RTOQ", "RTOQM", "UID", "AT", "AID", "PAT", "PAN", "PD", "PT", "AOD", // v1
        "GID", "MSN", "OFF", "MF", "OL", // v2
    ];

    fn overlay<S: VariableStore + ?Sized>(
        &mut self,
        reader: &StemReader<'_, S>,
    ) -> Result<(), MarshalError> {
        reader.load_int("VER", &mut self.version);
        reader.load_int("REP", &mut self.report);
        reader.load_int("MSG", &mut self.msg_type);
        reader.load_int("EXP", &mut self.expiry);
        reader.load_int("FBK", &mut self.feedback);
        reader.load_int("ENC", &mut self.encoding);
        reader.load_int("CCSI", &mut self.coded_char_set_id);
        reader.load_fixed_string("FORM", &mut self.format);
        reader.load_int("PRI", &mut self.priority);
        reader.load_int("PER", &mut self.persistence);
        reader.load_bytes("MSGID", &mut self.msg_id);
        reader.load_bytes("CID", &mut self.correl_id);
        reader.load_int("BC", &mut self.backout_count);
        reader.load_fixed_string("RTOQ", &mut self.reply_to_q);
        reader.load_fixed_string("RTOQM", &mut self.reply_to_qmgr);
        reader.load_fixed_string("UID", &mut self.user_identifier);
        reader.load_bytes("AT", &mut self.accounting_token);
        reader.load_fixed_string("AID", &mut self.appl_identity_data);
        reader.load_int("PAT", &mut self.put_appl_type);
        reader.load_fixed_string("PAN", &mut self.put_appl_name);
        reader.load_fixed_string("PD", &mut self.put_date);
        reader.load_fixed_string("PT", &mut self.put_time);
        reader.load_fixed_string("AOD", &mut self.appl_origin_data);

        reader.load_bytes("GID", &mut self.group_id);
        reader.load_int("MSN", &mut self.msg_seq_number);
        reader.load_int("OFF", &mut self.offset);
        reader.load_int("MF", &mut self.msg_flags);
        reader.load_int("OL", &mut self.original_length);
        Ok(())
    }

    fn emit<S: VariableStore + ?Sized>(&self, writer: &mut StemWriter<'_, S>) {
        emit_md_v1(self, writer);
        writer.put_bytes("GID", &self.group_id);
        writer.put_int("MSN", self.msg_seq_number);
        writer.put_int("OFF", self.offset);
        writer.put_int("MF", self.msg_flags);
        writer.put_int("OL", self.original_length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_priority_overlay() {
        let mut store = MemoryStore::new();
        store.set_str("MD.PRI", "5");

        let md = MessageDescriptor::to_record(&store, "MD.").unwrap();
        assert_eq!(md.priority, 5);
        assert_eq!(
            md,
            MessageDescriptor {
                priority: 5,
                ..MessageDescriptor::default()
            }
        );
    }

    #[test]
    fn test_v1_tags_prefix_full_set() {
        assert_eq!(&MessageDescriptor::TAGS[..MD_V1_TAGS.len()], MD_V1_TAGS);
    }
}
