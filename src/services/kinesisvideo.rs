use crate::catalog::service;

service! {
    /// Statement provider for service [kinesisvideo](https://docs.aws.amazon.com/IAM/latest/UserGuide/list_amazonkinesisvideostreams.html).
    ///
    /// Covers both video streams and WebRTC signaling channels.
    pub struct Kinesisvideo;
    prefix: "kinesisvideo",
    name: "Amazon Kinesis Video Streams",
    url: "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_amazonkinesisvideostreams.html",
    actions: {
        connect_as_master => "ConnectAsMaster" [Write] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_ConnectAsMaster.html",
            description: "Grants permission to connect as a master to the signaling channel specified by the endpoint",
            resources: [("channel", true, [])],
            conditions: [],
            dependent: [],
        }
        connect_as_viewer => "ConnectAsViewer" [Write] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_ConnectAsViewer.html",
            description: "Grants permission to connect as a viewer to the signaling channel specified by the endpoint",
            resources: [("channel", true, [])],
            conditions: [],
            dependent: [],
        }
        create_signaling_channel => "CreateSignalingChannel" [Write] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_CreateSignalingChannel.html",
            description: "Grants permission to create a signaling channel",
            resources: [("channel", true, [])],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        create_stream => "CreateStream" [Write] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_CreateStream.html",
            description: "Grants permission to create a Kinesis video stream",
            resources: [("stream", true, [])],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        delete_signaling_channel => "DeleteSignalingChannel" [Write] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_DeleteSignalingChannel.html",
            description: "Grants permission to delete an existing signaling channel",
            resources: [("channel", true, [])],
            conditions: [],
            dependent: [],
        }
        delete_stream => "DeleteStream" [Write] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_DeleteStream.html",
            description: "Grants permission to delete an existing Kinesis video stream",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
        describe_signaling_channel => "DescribeSignalingChannel" [List] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_DescribeSignalingChannel.html",
            description: "Grants permission to describe the specified signaling channel",
            resources: [("channel", true, [])],
            conditions: [],
            dependent: [],
        }
        describe_stream => "DescribeStream" [List] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_DescribeStream.html",
            description: "Grants permission to describe the specified Kinesis video stream",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
        get_clip => "GetClip" [Read] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_GetClip.html",
            description: "Grants permission to get a media clip from a video stream",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
        get_dash_streaming_session_url => "GetDASHStreamingSessionURL" [Read] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_GetDASHStreamingSessionURL.html",
            description: "Grants permission to create a URL for MPEG-DASH video streaming",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
        get_data_endpoint => "GetDataEndpoint" [Read] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_GetDataEndpoint.html",
            description: "Grants permission to get an endpoint for a specified stream for either reading or writing media data to Kinesis Video Streams",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
        get_hls_streaming_session_url => "GetHLSStreamingSessionURL" [Read] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_GetHLSStreamingSessionURL.html",
            description: "Grants permission to create a URL for HLS video streaming",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
        get_ice_server_config => "GetIceServerConfig" [Read] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_GetIceServerConfig.html",
            description: "Grants permission to get the ICE server configuration",
            resources: [("channel", true, [])],
            conditions: [],
            dependent: [],
        }
        get_media => "GetMedia" [Read] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_GetMedia.html",
            description: "Grants permission to return media content of a Kinesis video stream",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
        get_media_for_fragment_list => "GetMediaForFragmentList" [Read] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_GetMediaForFragmentList.html",
            description: "Grants permission to read and return media data only from persisted storage",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
        get_signaling_channel_endpoint => "GetSignalingChannelEndpoint" [Read] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_GetSignalingChannelEndpoint.html",
            description: "Grants permission to get endpoints for a specified combination of protocol and role for a signaling channel",
            resources: [("channel", true, [])],
            conditions: [],
            dependent: [],
        }
        list_fragments => "ListFragments" [List] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_ListFragments.html",
            description: "Grants permission to list the fragments from archival storage based on the pagination token or selector type with range specified",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
        list_signaling_channels => "ListSignalingChannels" [List] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_ListSignalingChannels.html",
            description: "Grants permission to list your signaling channels",
            resources: [],
            conditions: [],
            dependent: [],
        }
        list_streams => "ListStreams" [List] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_ListStreams.html",
            description: "Grants permission to list your Kinesis video streams",
            resources: [],
            conditions: [],
            dependent: [],
        }
        list_tags_for_resource => "ListTagsForResource" [Read] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_ListTagsForResource.html",
            description: "Grants permission to fetch the tags associated with your resource",
            resources: [("channel", false, []), ("stream", false, [])],
            conditions: [],
            dependent: [],
        }
        list_tags_for_stream => "ListTagsForStream" [Read] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_ListTagsForStream.html",
            description: "Grants permission to fetch the tags associated with Kinesis video stream",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
        put_media => "PutMedia" [Write] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_PutMedia.html",
            description: "Grants permission to send media data to a Kinesis video stream",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
        send_alexa_offer_to_master => "SendAlexaOfferToMaster" [Write] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_SendAlexaOfferToMaster.html",
            description: "Grants permission to send the Alexa SDP offer to the master",
            resources: [("channel", true, [])],
            conditions: [],
            dependent: [],
        }
        tag_resource => "TagResource" [Tagging] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_TagResource.html",
            description: "Grants permission to attach set of tags to your resource",
            resources: [("channel", false, []), ("stream", false, [])],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        tag_stream => "TagStream" [Tagging] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_TagStream.html",
            description: "Grants permission to attach set of tags to your Kinesis video streams",
            resources: [("stream", true, [])],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        untag_resource => "UntagResource" [Tagging] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_UntagResource.html",
            description: "Grants permission to remove one or more tags from your resource",
            resources: [("channel", false, []), ("stream", false, [])],
            conditions: ["aws:TagKeys"],
            dependent: [],
        }
        untag_stream => "UntagStream" [Tagging] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_UntagStream.html",
            description: "Grants permission to remove one or more tags from your Kinesis video streams",
            resources: [("stream", true, [])],
            conditions: ["aws:TagKeys"],
            dependent: [],
        }
        update_data_retention => "UpdateDataRetention" [Write] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_UpdateDataRetention.html",
            description: "Grants permission to update the data retention period of your Kinesis video stream",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
        update_signaling_channel => "UpdateSignalingChannel" [Write] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_UpdateSignalingChannel.html",
            description: "Grants permission to update an existing signaling channel",
            resources: [("channel", true, [])],
            conditions: [],
            dependent: [],
        }
        update_stream => "UpdateStream" [Write] {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/API_UpdateStream.html",
            description: "Grants permission to update an existing Kinesis video stream",
            resources: [("stream", true, [])],
            conditions: [],
            dependent: [],
        }
    },
    resources: {
        on_stream => "stream" {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/how-it-works.html",
            arn: "arn:${Partition}:kinesisvideo:${Region}:${Account}:stream/${StreamName}/${CreationTime}",
            params: (stream_name: "StreamName", creation_time: "CreationTime"),
            segments: (account: ACCOUNT, region: REGION, partition: PARTITION),
            conditions: ["aws:ResourceTag/${TagKey}"],
        }
        on_channel => "channel" {
            url: "https://docs.aws.amazon.com/kinesisvideostreams/latest/dg/kinesisvideostreams-webrtc-dg/latest/devguide/kvswebrtc-how-it-works.html",
            arn: "arn:${Partition}:kinesisvideo:${Region}:${Account}:channel/${ChannelName}/${CreationTime}",
            params: (channel_name: "ChannelName", creation_time: "CreationTime"),
            segments: (account: ACCOUNT, region: REGION, partition: PARTITION),
            conditions: ["aws:ResourceTag/${TagKey}"],
        }
    },
    conditions: {}
}
